//! Immutable, identified dataset.

use crate::parser::schema::{MatchCollection, MatchRecord};

/// Identity of one successful load
pub type DatasetId = u64;

/// A loaded match collection plus the identity derived values are keyed by
///
/// Datasets are never edited; reloading produces a new one with a new id.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    id: DatasetId,
    source: String,
    collection: MatchCollection,
}

impl Dataset {
    pub fn new(id: DatasetId, source: impl Into<String>, collection: MatchCollection) -> Self {
        Self {
            id,
            source: source.into(),
            collection,
        }
    }

    pub fn id(&self) -> DatasetId {
        self.id
    }

    /// File name or other label the data came from
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn collection(&self) -> &MatchCollection {
        &self.collection
    }

    /// Chronologically ordered rows
    pub fn records(&self) -> &[MatchRecord] {
        self.collection.records()
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }
}
