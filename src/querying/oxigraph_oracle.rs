//! Reference evaluation of star queries on an Oxigraph in-memory store.
//!
//! Used by the command-line driver to check the answers of a storage backend
//! for correctness (no answer outside the reference set) and completeness
//! (no reference answer missing).

use std::collections::HashSet;

use oxigraph::model::Quad;
use oxigraph::sparql::{QueryResults, SparqlEvaluator};
use oxigraph::store::Store;

use crate::core::{StarQuery, Substitution, Variable};
use crate::error::{Result, StoreError};

pub struct OxigraphOracle {
    store: Store,
}

impl OxigraphOracle {
    pub fn new(quads: &[Quad]) -> Result<Self> {
        let store = Store::new()?;
        for quad in quads {
            store.insert(quad)?;
        }
        Ok(Self { store })
    }

    /// Answers to `query`, projected on its answer variables.
    pub fn evaluate(&self, query: &StarQuery) -> Result<HashSet<Substitution>> {
        let evaluator = SparqlEvaluator::new();
        let parsed_query = evaluator
            .parse_query(&query.to_sparql())
            .map_err(|e| StoreError::Query(format!("{}: {}", query.label(), e)))?;
        let results = parsed_query.on_store(&self.store).execute()?;

        let mut answers = HashSet::new();
        if let QueryResults::Solutions(solutions) = results {
            for solution in solutions {
                let solution = solution?;
                answers.insert(
                    solution
                        .iter()
                        .map(|(var, term)| (Variable::new(var.as_str()), term.to_string()))
                        .collect(),
                );
            }
        }
        Ok(answers)
    }
}

/// Outcome of comparing a backend's answers with the reference answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// Every produced answer is a reference answer
    pub correct: bool,
    /// Every reference answer was produced
    pub complete: bool,
}

impl Verdict {
    pub fn compare(produced: &HashSet<Substitution>, reference: &HashSet<Substitution>) -> Self {
        Verdict { correct: produced.is_subset(reference), complete: reference.is_subset(produced) }
    }
}
