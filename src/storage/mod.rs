//! Storage backends and the contract they share.

use crate::config::{Backend, StorageConfig};
use crate::core::{RDFTriple, StarQuery, Substitution};
use crate::error::Result;
use crate::querying::star_join::{self, JoinStrategy};

pub mod giant_table;
pub mod hexa_store;
pub mod indexing {
    pub mod dictionary;
    pub mod permutation;
    pub mod statistics;
}

pub use giant_table::GiantTable;
pub use hexa_store::HexaStore;

/// Contract for an in-memory store of RDF facts.
///
/// Implementations are single-writer: `add` takes `&mut self`, read
/// operations take `&self`, so the borrow checker provides the required
/// serialization between writers and readers.
pub trait RDFStorage {
    /// Add a fact. Returns true if the store grew, false if it was already present.
    fn add(&mut self, triple: &RDFTriple) -> Result<bool>;

    /// Substitutions describing every fact that matches `pattern`.
    fn match_pattern(&self, pattern: &RDFTriple) -> Result<Vec<Substitution>>;

    /// Number of facts matching `pattern`.
    fn how_many(&self, pattern: &RDFTriple) -> Result<u64>;

    /// Number of distinct stored facts.
    fn size(&self) -> u64;

    /// Every stored fact, decoded.
    fn atoms(&self) -> Result<Vec<RDFTriple>>;

    /// Join strategy used by [`RDFStorage::match_star`].
    fn join_strategy(&self) -> JoinStrategy {
        JoinStrategy::default()
    }

    /// Answers to a star query. Each substitution binds every variable of the
    /// query's patterns; projecting to the answer variables is left to the caller.
    fn match_star(&self, query: &StarQuery) -> Result<Vec<Substitution>> {
        star_join::evaluate(self, query, self.join_strategy())
    }

    /// Add every fact. Returns true if at least one was new.
    fn add_all(&mut self, triples: &[RDFTriple]) -> Result<bool> {
        let mut grew = false;
        for triple in triples {
            grew |= self.add(triple)?;
        }
        Ok(grew)
    }
}

/// Build an empty store for `config`.
pub fn open(config: &StorageConfig) -> Box<dyn RDFStorage> {
    match config.backend {
        Backend::GiantTable => Box::new(GiantTable::with_join_strategy(config.join_strategy)),
        Backend::HexaStore => Box::new(HexaStore::with_join_strategy(config.join_strategy)),
    }
}
