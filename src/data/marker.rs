//! # Marker Definitions
//!
//! Marker index type and the id table for the columns of a genotype matrix.

use std::collections::HashMap;
use std::sync::Arc;
use serde::{Deserialize, Serialize};

use crate::error::{GenvalError, Result};

/// Zero-cost newtype for marker (column) indices
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct MarkerIdx(pub u32);

impl MarkerIdx {
    pub fn new(idx: u32) -> Self {
        Self(idx)
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for MarkerIdx {
    fn from(idx: u32) -> Self {
        Self(idx)
    }
}

impl From<usize> for MarkerIdx {
    fn from(idx: usize) -> Self {
        debug_assert!(u32::try_from(idx).is_ok(), "index {} exceeds u32", idx);
        Self(idx as u32)
    }
}

impl From<MarkerIdx> for usize {
    fn from(idx: MarkerIdx) -> usize {
        idx.0 as usize
    }
}

/// Ordered collection of marker ids
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Markers {
    ids: Vec<Arc<str>>,
    #[serde(skip)]
    id_to_idx: HashMap<Arc<str>, MarkerIdx>,
}

impl Markers {
    /// Create from marker ids, rejecting duplicates
    pub fn from_ids(ids: Vec<String>) -> Result<Self> {
        let ids: Vec<Arc<str>> = ids.into_iter().map(|s| s.into()).collect();
        let mut id_to_idx = HashMap::with_capacity(ids.len());
        for (i, id) in ids.iter().enumerate() {
            if id_to_idx.insert(id.clone(), MarkerIdx::new(i as u32)).is_some() {
                return Err(GenvalError::invalid_data(format!(
                    "duplicate marker id '{}'",
                    id
                )));
            }
        }
        Ok(Self { ids, id_to_idx })
    }

    /// Ids `m1..=mN`
    pub fn numbered(n: usize) -> Self {
        let ids: Vec<Arc<str>> = (1..=n).map(|i| Arc::from(format!("m{}", i))).collect();
        let id_to_idx = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), MarkerIdx::new(i as u32)))
            .collect();
        Self { ids, id_to_idx }
    }

    /// Number of markers
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn index_of(&self, id: &str) -> Option<MarkerIdx> {
        self.id_to_idx.get(id).copied()
    }

    pub fn ids(&self) -> &[Arc<str>] {
        &self.ids
    }

    /// Column of each of `self`'s markers within `genotyped`, in `self` order.
    ///
    /// Every marker must be present in `genotyped`.
    pub fn positions_in(&self, genotyped: &Markers) -> Result<Vec<usize>> {
        self.ids
            .iter()
            .map(|id| {
                genotyped.index_of(id).map(MarkerIdx::as_usize).ok_or_else(|| {
                    GenvalError::invalid_data(format!(
                        "marker '{}' has effects but no genotypes",
                        id
                    ))
                })
            })
            .collect()
    }
}

impl std::ops::Index<MarkerIdx> for Markers {
    type Output = str;

    fn index(&self, idx: MarkerIdx) -> &Self::Output {
        &self.ids[idx.as_usize()]
    }
}
