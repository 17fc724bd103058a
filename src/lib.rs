//! # qengine
//!
//! A main-memory triple store for subject-predicate-object facts with
//! pattern matching and star query evaluation.
//!
//! Facts are dictionary-encoded into integer triples and kept by one of two
//! storage backends behind the [`RDFStorage`] contract:
//!
//! - [`GiantTable`]: an unindexed list of facts, scanned linearly
//! - [`HexaStore`]: six permutation indexes plus selectivity statistics
//!
//! Star queries (conjunctions of patterns sharing variables) are evaluated
//! once, for every backend, by the join engine in [`querying::star_join`].
//!
//! ## Example
//!
//! ```rust
//! use qengine::{HexaStore, RDFStorage, RDFTriple, StarQuery, Term, Variable};
//!
//! fn example() -> qengine::Result<()> {
//!     let mut store = HexaStore::new();
//!     store.add(&RDFTriple::fact("<Bob>", "<knows>", "<Alice>"))?;
//!     store.add(&RDFTriple::fact("<Bob>", "<livesIn>", "<Paris>"))?;
//!
//!     let x = Term::variable("x");
//!     let query = StarQuery::new(
//!         "q1",
//!         vec![
//!             RDFTriple::new(x.clone(), Term::constant("<knows>"), Term::constant("<Alice>")),
//!             RDFTriple::new(x, Term::constant("<livesIn>"), Term::constant("<Paris>")),
//!         ],
//!         vec![Variable::new("x")],
//!     );
//!     let answers = store.match_star(&query)?;
//!     assert_eq!(answers.len(), 1);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]

/// Core data structures and types
pub mod core;

/// Storage backends and indexing structures
pub mod storage;

/// Configuration structures and utilities
pub mod config;

/// Parsing of facts and star queries
pub mod parsing {
    pub mod rdf_parser;
    pub mod star_query_parser;
}

/// Query evaluation
pub mod querying {
    pub mod oxigraph_oracle;
    pub mod star_join;
}

pub mod error;

// Re-export commonly used types
pub use crate::config::{Backend, StorageConfig};
pub use crate::core::{RDFTriple, StarQuery, Substitution, Term, Variable};
pub use crate::error::{Result, StoreError};
pub use crate::storage::{GiantTable, HexaStore, RDFStorage};
