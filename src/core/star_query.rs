use std::collections::BTreeSet;
use std::fmt;

use crate::core::{RDFTriple, Term, Variable};

/// Conjunction of triple patterns around shared variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarQuery {
    label: String,
    patterns: Vec<RDFTriple>,
    answer_variables: Vec<Variable>,
}

impl StarQuery {
    pub fn new(label: &str, patterns: Vec<RDFTriple>, answer_variables: Vec<Variable>) -> Self {
        Self { label: label.to_string(), patterns, answer_variables }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn patterns(&self) -> &[RDFTriple] {
        &self.patterns
    }

    pub fn answer_variables(&self) -> &[Variable] {
        &self.answer_variables
    }

    /// Every variable occurring in at least one pattern.
    pub fn variables(&self) -> BTreeSet<Variable> {
        self.patterns.iter().flat_map(RDFTriple::variables).collect()
    }

    /// The first variable (in subject, predicate, object order of the first
    /// pattern) that occurs in every pattern.
    pub fn central_variable(&self) -> Option<&Variable> {
        let (first, rest) = self.patterns.split_first()?;
        first
            .terms()
            .into_iter()
            .filter_map(Term::as_variable)
            .find(|var| rest.iter().all(|pattern| pattern.variables().contains(*var)))
    }

    /// Render as a SPARQL SELECT query over the default graph.
    pub fn to_sparql(&self) -> String {
        let projection = if self.answer_variables.is_empty() {
            "*".to_string()
        } else {
            self.answer_variables.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
        };
        let body = self
            .patterns
            .iter()
            .map(|p| format!("  {} {} {} .", p.subject, p.predicate, p.object))
            .collect::<Vec<_>>()
            .join("\n");
        format!("SELECT {} WHERE {{\n{}\n}}", projection, body)
    }
}

impl fmt::Display for StarQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let patterns: Vec<String> = self.patterns.iter().map(ToString::to_string).collect();
        let answers: Vec<String> = self.answer_variables.iter().map(ToString::to_string).collect();
        write!(f, "{} [{}] -> ({})", self.label, patterns.join(", "), answers.join(", "))
    }
}
