//! Dictionary encoding/decoding of triples and patterns

use crate::core::{EncodedTriple, RDFTriple, Substitution, Term, TermId};
use crate::error::{Result, StoreError};
use crate::storage::indexing::dictionary::Dictionary;

/// A pattern with its constants resolved to ids; `None` marks a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedPattern {
    pub subject: Option<TermId>,
    pub predicate: Option<TermId>,
    pub object: Option<TermId>,
}

impl EncodedPattern {
    /// True when every bound position agrees with `row`.
    pub fn matches(&self, row: &EncodedTriple) -> bool {
        self.subject.map_or(true, |s| s == row.subject)
            && self.predicate.map_or(true, |p| p == row.predicate)
            && self.object.map_or(true, |o| o == row.object)
    }

    /// Which of subject, predicate, object are bound.
    pub fn bound_positions(&self) -> (bool, bool, bool) {
        (self.subject.is_some(), self.predicate.is_some(), self.object.is_some())
    }
}

impl RDFTriple {
    /// Encode this fact, allocating ids for unseen constants.
    pub fn encode(&self, dict: &mut Dictionary) -> Result<EncodedTriple> {
        let mut ids = [0; 3];
        for (slot, term) in ids.iter_mut().zip(self.terms()) {
            let value = term.as_constant().ok_or_else(|| {
                StoreError::InvalidInput(format!("facts cannot contain variables: {}", self))
            })?;
            *slot = dict.encode(value)?;
        }
        Ok(EncodedTriple::new(ids[0], ids[1], ids[2]))
    }

    /// Resolve the constants of this pattern without touching the dictionary.
    /// Returns `None` when some constant was never seen, in which case no
    /// stored fact can match.
    pub fn resolve(&self, dict: &Dictionary) -> Option<EncodedPattern> {
        let resolve = |term: &Term| match term {
            Term::Variable(_) => Some(None),
            Term::Constant(value) => dict.lookup(value).map(Some),
        };
        Some(EncodedPattern {
            subject: resolve(&self.subject)?,
            predicate: resolve(&self.predicate)?,
            object: resolve(&self.object)?,
        })
    }

    /// Bind the variables of this pattern to the decoded values of `row`.
    ///
    /// Returns `Ok(None)` when the pattern repeats a variable and the row
    /// carries different constants at those positions.
    pub fn bind(&self, row: &EncodedTriple, dict: &Dictionary) -> Result<Option<Substitution>> {
        let mut substitution = Substitution::new();
        let ids = [row.subject, row.predicate, row.object];
        for (term, id) in self.terms().into_iter().zip(ids) {
            if let Term::Variable(var) = term {
                if !substitution.bind(var.clone(), dict.decode(id)?) {
                    return Ok(None);
                }
            }
        }
        Ok(Some(substitution))
    }
}

impl EncodedTriple {
    /// Decode this stored fact back into string terms.
    pub fn decode(&self, dict: &Dictionary) -> Result<RDFTriple> {
        Ok(RDFTriple::fact(
            dict.decode(self.subject)?,
            dict.decode(self.predicate)?,
            dict.decode(self.object)?,
        ))
    }
}
