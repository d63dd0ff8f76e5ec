//! # Individual Definitions
//!
//! Individual index types and the id table for the rows of a genotype matrix.

use std::collections::HashMap;
use std::sync::Arc;
use serde::{Deserialize, Serialize};

use crate::error::{GenvalError, Result};

/// Zero-cost newtype for individual (row) indices
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct IndIdx(pub u32);

impl IndIdx {
    pub fn new(idx: u32) -> Self {
        Self(idx)
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for IndIdx {
    fn from(idx: u32) -> Self {
        Self(idx)
    }
}

impl From<usize> for IndIdx {
    fn from(idx: usize) -> Self {
        debug_assert!(u32::try_from(idx).is_ok(), "index {} exceeds u32", idx);
        Self(idx as u32)
    }
}

impl From<IndIdx> for usize {
    fn from(idx: IndIdx) -> usize {
        idx.0 as usize
    }
}

/// Ordered collection of individual ids
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Individuals {
    /// Individual IDs in row order
    ids: Vec<Arc<str>>,
    /// Map from individual ID to row for fast lookup
    #[serde(skip)]
    id_to_idx: HashMap<Arc<str>, IndIdx>,
}

impl Individuals {
    /// Create from a vector of individual IDs
    ///
    /// Fails with `InvalidData` if an id appears twice.
    pub fn from_ids(ids: Vec<String>) -> Result<Self> {
        let ids: Vec<Arc<str>> = ids.into_iter().map(|s| s.into()).collect();
        let mut id_to_idx = HashMap::with_capacity(ids.len());
        for (i, id) in ids.iter().enumerate() {
            if id_to_idx.insert(id.clone(), IndIdx::new(i as u32)).is_some() {
                return Err(GenvalError::invalid_data(format!(
                    "duplicate individual id '{}'",
                    id
                )));
            }
        }
        Ok(Self { ids, id_to_idx })
    }

    /// Ids `ind1..=indN`, used when no names are supplied
    pub fn numbered(n: usize) -> Self {
        let ids: Vec<Arc<str>> = (1..=n).map(|i| Arc::from(format!("ind{}", i))).collect();
        let id_to_idx = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), IndIdx::new(i as u32)))
            .collect();
        Self { ids, id_to_idx }
    }

    /// Number of individuals
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Look up an individual by id
    pub fn index_of(&self, id: &str) -> Option<IndIdx> {
        self.id_to_idx.get(id).copied()
    }

    /// Get all individual IDs
    pub fn ids(&self) -> &[Arc<str>] {
        &self.ids
    }
}

impl std::ops::Index<IndIdx> for Individuals {
    type Output = str;

    fn index(&self, idx: IndIdx) -> &Self::Output {
        &self.ids[idx.as_usize()]
    }
}
