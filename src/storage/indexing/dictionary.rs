use std::collections::HashMap;

use crate::core::TermId;
use crate::error::{Result, StoreError};

/// Bidirectional mapping between constant strings and dense integer ids.
///
/// Ids are handed out sequentially from 0 in order of first sight and are
/// never reused. `encode` is the only path that allocates; `lookup` is the
/// read-only counterpart used while matching.
#[derive(Debug, Default)]
pub struct Dictionary {
    string_to_id: HashMap<String, TermId>,
    id_to_string: Vec<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Dictionary {
            string_to_id: HashMap::with_capacity(capacity),
            id_to_string: Vec::with_capacity(capacity),
        }
    }

    /// Returns the id of `value`, assigning the next free one on first sight.
    pub fn encode(&mut self, value: &str) -> Result<TermId> {
        if value.is_empty() {
            return Err(StoreError::InvalidInput("constant must not be empty".to_string()));
        }
        if let Some(&id) = self.string_to_id.get(value) {
            return Ok(id);
        }

        let id = TermId::try_from(self.id_to_string.len())
            .map_err(|_| StoreError::InvalidInput("dictionary id space exhausted".to_string()))?;
        self.string_to_id.insert(value.to_string(), id);
        self.id_to_string.push(value.to_string());
        Ok(id)
    }

    pub fn lookup(&self, value: &str) -> Option<TermId> {
        self.string_to_id.get(value).copied()
    }

    pub fn decode(&self, id: TermId) -> Result<&str> {
        self.id_to_string
            .get(id as usize)
            .map(String::as_str)
            .ok_or_else(|| StoreError::NotFound(format!("dictionary identifier {}", id)))
    }

    pub fn contains(&self, value: &str) -> bool {
        self.string_to_id.contains_key(value)
    }

    pub fn len(&self) -> usize {
        self.id_to_string.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_string.is_empty()
    }
}
