use crate::core::{EncodedTriple, RDFTriple, Substitution};
use crate::error::Result;
use crate::querying::star_join::JoinStrategy;
use crate::storage::indexing::dictionary::Dictionary;
use crate::storage::RDFStorage;

/// Unindexed store: a flat list of encoded facts. Every operation is a
/// linear scan, which makes it the reference the indexed store is checked
/// against.
#[derive(Debug, Default)]
pub struct GiantTable {
    dictionary: Dictionary,
    table: Vec<EncodedTriple>,
    join_strategy: JoinStrategy,
}

impl GiantTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_join_strategy(join_strategy: JoinStrategy) -> Self {
        Self { join_strategy, ..Self::default() }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    fn matching_rows<'a>(&'a self, pattern: &RDFTriple) -> impl Iterator<Item = &'a EncodedTriple> + 'a {
        let resolved = pattern.resolve(&self.dictionary);
        self.table.iter().filter(move |row| resolved.map_or(false, |p| p.matches(row)))
    }
}

impl RDFStorage for GiantTable {
    fn add(&mut self, triple: &RDFTriple) -> Result<bool> {
        let encoded = triple.encode(&mut self.dictionary)?;
        if self.table.contains(&encoded) {
            return Ok(false);
        }
        self.table.push(encoded);
        Ok(true)
    }

    fn match_pattern(&self, pattern: &RDFTriple) -> Result<Vec<Substitution>> {
        let mut results = Vec::new();
        for row in self.matching_rows(pattern) {
            if let Some(substitution) = pattern.bind(row, &self.dictionary)? {
                results.push(substitution);
            }
        }
        Ok(results)
    }

    fn how_many(&self, pattern: &RDFTriple) -> Result<u64> {
        if pattern.has_repeated_variable() {
            return Ok(self.match_pattern(pattern)?.len() as u64);
        }
        Ok(self.matching_rows(pattern).count() as u64)
    }

    fn size(&self) -> u64 {
        self.table.len() as u64
    }

    fn atoms(&self) -> Result<Vec<RDFTriple>> {
        self.table.iter().map(|row| row.decode(&self.dictionary)).collect()
    }

    fn join_strategy(&self) -> JoinStrategy {
        self.join_strategy
    }
}
