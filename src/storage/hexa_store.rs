use log::trace;

use crate::core::{EncodedPattern, EncodedTriple, RDFTriple, Substitution, TermId};
use crate::error::Result;
use crate::querying::star_join::JoinStrategy;
use crate::storage::indexing::dictionary::Dictionary;
use crate::storage::indexing::permutation::{Permutation, PermutationIndex};
use crate::storage::indexing::statistics::SelectivityStatistics;
use crate::storage::RDFStorage;

/// Store keeping one index per permutation of (subject, predicate, object),
/// so every combination of bound positions has a direct traversal path, plus
/// frequency statistics for O(1) cardinality estimates.
///
/// The six indexes and the statistics are only written together, inside
/// [`RDFStorage::add`].
#[derive(Debug)]
pub struct HexaStore {
    dictionary: Dictionary,
    indexes: [PermutationIndex; 6],
    statistics: SelectivityStatistics,
    len: u64,
    join_strategy: JoinStrategy,
}

impl Default for HexaStore {
    fn default() -> Self {
        Self {
            dictionary: Dictionary::new(),
            indexes: Permutation::ALL.map(PermutationIndex::new),
            statistics: SelectivityStatistics::new(),
            len: 0,
            join_strategy: JoinStrategy::default(),
        }
    }
}

impl HexaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_join_strategy(join_strategy: JoinStrategy) -> Self {
        Self { join_strategy, ..Self::default() }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    fn index(&self, order: Permutation) -> &PermutationIndex {
        // `indexes` follows the declaration order of `Permutation`
        &self.indexes[order as usize]
    }

    /// Facts matching `pattern`, read from the index led by its bound positions.
    fn scan(&self, pattern: &EncodedPattern) -> Box<dyn Iterator<Item = EncodedTriple> + '_> {
        let (s, p, o) = pattern.bound_positions();
        let order = Permutation::for_bound(s, p, o);
        let index = self.index(order);

        if let (Some(s), Some(p), Some(o)) = (pattern.subject, pattern.predicate, pattern.object) {
            let triple = EncodedTriple::new(s, p, o);
            return Box::new(index.contains(&triple).then_some(triple).into_iter());
        }

        // bound ids in the index's key order
        let probe = EncodedTriple::new(
            pattern.subject.unwrap_or(TermId::MAX),
            pattern.predicate.unwrap_or(TermId::MAX),
            pattern.object.unwrap_or(TermId::MAX),
        );
        let bound = [s, p, o].iter().filter(|&&b| b).count();
        let key = order.project(&probe);
        trace!("scanning {} index with {} bound key(s)", order.name(), bound);
        index.scan(&key[..bound])
    }
}

impl RDFStorage for HexaStore {
    fn add(&mut self, triple: &RDFTriple) -> Result<bool> {
        let encoded = triple.encode(&mut self.dictionary)?;
        if self.index(Permutation::Spo).contains(&encoded) {
            return Ok(false);
        }

        for index in &mut self.indexes {
            index.insert(&encoded);
        }
        self.statistics.record(&encoded);
        self.len += 1;
        Ok(true)
    }

    fn match_pattern(&self, pattern: &RDFTriple) -> Result<Vec<Substitution>> {
        let Some(resolved) = pattern.resolve(&self.dictionary) else {
            return Ok(Vec::new());
        };

        let mut results = Vec::new();
        for row in self.scan(&resolved) {
            if let Some(substitution) = pattern.bind(&row, &self.dictionary)? {
                results.push(substitution);
            }
        }
        Ok(results)
    }

    fn how_many(&self, pattern: &RDFTriple) -> Result<u64> {
        let Some(resolved) = pattern.resolve(&self.dictionary) else {
            return Ok(0);
        };
        // statistics cannot see equality between positions
        if pattern.has_repeated_variable() {
            return Ok(self.match_pattern(pattern)?.len() as u64);
        }

        match self.statistics.estimate(&resolved, self.len) {
            Some(count) => Ok(count),
            None => Ok(self.scan(&resolved).count() as u64),
        }
    }

    fn size(&self) -> u64 {
        self.len
    }

    fn atoms(&self) -> Result<Vec<RDFTriple>> {
        self.index(Permutation::Spo).scan(&[]).map(|row| row.decode(&self.dictionary)).collect()
    }

    fn join_strategy(&self) -> JoinStrategy {
        self.join_strategy
    }
}
