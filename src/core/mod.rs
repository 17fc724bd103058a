//! Core data structures and types for the triple store

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// Dictionary identifier of a constant.
/// Uses u32 for dictionary IDs (4B max unique strings)
pub type TermId = u32;

/// Named placeholder inside a pattern. The leading `?` is not part of the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variable(String);

impl Variable {
    /// Accepts the name with or without its `?` sigil.
    pub fn new(name: &str) -> Self {
        Variable(name.strip_prefix('?').unwrap_or(name).to_string())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.0)
    }
}

/// A position of a triple: either a constant (IRI or literal, kept in its
/// lexical form) or a variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    Constant(String),
    Variable(Variable),
}

impl Term {
    pub fn constant(value: &str) -> Self {
        Term::Constant(value.to_string())
    }

    pub fn variable(name: &str) -> Self {
        Term::Variable(Variable::new(name))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    pub fn as_constant(&self) -> Option<&str> {
        match self {
            Term::Constant(value) => Some(value),
            Term::Variable(_) => None,
        }
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Term::Variable(var) => Some(var),
            Term::Constant(_) => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Constant(value) => write!(f, "{}", value),
            Term::Variable(var) => write!(f, "{}", var),
        }
    }
}

/// User-facing triple with string terms. A fact when all three terms are
/// constants, a pattern otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RDFTriple {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
}

impl RDFTriple {
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self { subject, predicate, object }
    }

    /// Shorthand for a fully constant triple.
    pub fn fact(subject: &str, predicate: &str, object: &str) -> Self {
        Self::new(Term::constant(subject), Term::constant(predicate), Term::constant(object))
    }

    /// Terms in subject, predicate, object order.
    pub fn terms(&self) -> [&Term; 3] {
        [&self.subject, &self.predicate, &self.object]
    }

    pub fn is_fact(&self) -> bool {
        self.terms().iter().all(|term| !term.is_variable())
    }

    pub fn variables(&self) -> BTreeSet<Variable> {
        self.terms().into_iter().filter_map(Term::as_variable).cloned().collect()
    }

    /// True when some variable occupies more than one position.
    pub fn has_repeated_variable(&self) -> bool {
        let count = self.terms().iter().filter(|term| term.is_variable()).count();
        count > self.variables().len()
    }
}

impl TryFrom<Vec<Term>> for RDFTriple {
    type Error = StoreError;

    fn try_from(terms: Vec<Term>) -> Result<Self> {
        match <[Term; 3]>::try_from(terms) {
            Ok([subject, predicate, object]) => Ok(Self::new(subject, predicate, object)),
            Err(terms) => Err(StoreError::InvalidArity(terms.len())),
        }
    }
}

impl fmt::Display for RDFTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}, {}>", self.subject, self.predicate, self.object)
    }
}

/// Internal stored fact with encoded IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EncodedTriple {
    pub subject: TermId,
    pub predicate: TermId,
    pub object: TermId,
}

impl EncodedTriple {
    pub fn new(subject: TermId, predicate: TermId, object: TermId) -> Self {
        Self { subject, predicate, object }
    }
}

pub mod encoding;
pub mod star_query;
pub mod substitution;

pub use encoding::*;
pub use star_query::StarQuery;
pub use substitution::Substitution;
