//! Loading facts from N-Triples.
//!
//! Terms keep their N-Triples lexical form (`<iri>`, `"literal"`,
//! `"v"^^<datatype>`, `_:blank`), which is also the form used for constants
//! in queries, so facts and patterns encode to the same dictionary entries.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use oxigraph::io::{RdfFormat, RdfParser};
use oxigraph::model::Quad;

use crate::core::RDFTriple;
use crate::error::{Result, StoreError};

/// Parse every statement of an N-Triples document.
pub fn read_quads<R: Read>(reader: R) -> Result<Vec<Quad>> {
    let mut quads = Vec::new();
    for quad in RdfParser::from_format(RdfFormat::NTriples).for_reader(reader) {
        quads.push(quad?);
    }
    Ok(quads)
}

pub fn read_quads_from_file(path: &Path) -> Result<Vec<Quad>> {
    let file = File::open(path)
        .map_err(|e| StoreError::Io(format!("cannot open {}: {}", path.display(), e)))?;
    read_quads(BufReader::new(file))
}

/// Convert a parsed statement into a fact, dropping its graph name.
pub fn quad_to_triple(quad: &Quad) -> RDFTriple {
    RDFTriple::fact(&quad.subject.to_string(), &quad.predicate.to_string(), &quad.object.to_string())
}

/// Parse an N-Triples document straight into facts.
pub fn parse_ntriples<R: Read>(reader: R) -> Result<Vec<RDFTriple>> {
    Ok(read_quads(reader)?.iter().map(quad_to_triple).collect())
}
