//! Star query evaluation shared by every storage backend.
//!
//! Patterns are ordered by their estimated cardinality (most selective
//! first, ties keep their query order), the first one seeds the candidate
//! set, and each following pattern is joined in by merging compatible
//! substitutions. The answer set does not depend on the ordering.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{RDFTriple, StarQuery, Substitution};
use crate::error::Result;
use crate::storage::RDFStorage;

/// How non-leading patterns are joined into the candidate set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinStrategy {
    /// Match each pattern on its own and merge every candidate with every result.
    #[default]
    Rematch,
    /// Instantiate each pattern with a candidate's bindings before matching it,
    /// so indexed backends only visit rows that can join.
    BindingPushdown,
}

pub fn evaluate<S: RDFStorage + ?Sized>(
    storage: &S,
    query: &StarQuery,
    strategy: JoinStrategy,
) -> Result<Vec<Substitution>> {
    if query.patterns().is_empty() {
        return Ok(Vec::new());
    }

    let mut ordered = Vec::with_capacity(query.patterns().len());
    for pattern in query.patterns() {
        ordered.push((storage.how_many(pattern)?, pattern));
    }
    ordered.sort_by_key(|(estimate, _)| *estimate);
    debug!(
        "query {}: evaluation order {:?}",
        query.label(),
        ordered.iter().map(|(estimate, _)| *estimate).collect::<Vec<_>>()
    );

    let mut patterns = ordered.into_iter().map(|(_, pattern)| pattern);
    let Some(first) = patterns.next() else {
        return Ok(Vec::new());
    };

    let mut candidates = storage.match_pattern(first)?;
    for pattern in patterns {
        if candidates.is_empty() {
            break;
        }
        candidates = match strategy {
            JoinStrategy::Rematch => join_rematch(storage, &candidates, pattern)?,
            JoinStrategy::BindingPushdown => join_pushdown(storage, &candidates, pattern)?,
        };
    }

    if candidates.is_empty() {
        debug!("query {}: no answers", query.label());
    }
    Ok(candidates)
}

fn join_rematch<S: RDFStorage + ?Sized>(
    storage: &S,
    candidates: &[Substitution],
    pattern: &RDFTriple,
) -> Result<Vec<Substitution>> {
    let matches = storage.match_pattern(pattern)?;
    Ok(candidates
        .iter()
        .flat_map(|candidate| matches.iter().filter_map(move |m| candidate.merged(m)))
        .collect())
}

fn join_pushdown<S: RDFStorage + ?Sized>(
    storage: &S,
    candidates: &[Substitution],
    pattern: &RDFTriple,
) -> Result<Vec<Substitution>> {
    let mut joined = Vec::new();
    for candidate in candidates {
        let instantiated = candidate.apply(pattern);
        for m in storage.match_pattern(&instantiated)? {
            if let Some(merged) = candidate.merged(&m) {
                joined.push(merged);
            }
        }
    }
    Ok(joined)
}
