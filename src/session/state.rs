//! Active dataset and user selection.

use super::cache::AnalysisCache;
use super::dataset::{Dataset, DatasetId};
use crate::aggregator::position::PositionFilter;
use crate::parser::csv_loader::{load_csv_file, parse_csv};
use crate::parser::schema::MatchCollection;
use crate::utils::error::LoadError;
use log::{info, warn};
use std::path::Path;

/// What the user is currently looking at
///
/// Kept apart from the dataset; engine calls receive it only as an
/// explicit argument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub position: PositionFilter,

    /// Selected metric key for the distribution view
    pub metric: Option<String>,
}

/// One user session: at most one active dataset at a time
#[derive(Debug, Default)]
pub struct Session {
    dataset: Option<Dataset>,
    next_id: DatasetId,
    selection: Selection,
    cache: AnalysisCache,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse CSV text and make it the active dataset
    ///
    /// **Public** - main entry point for loading data
    ///
    /// # Arguments
    /// * `text` - Complete CSV file contents
    /// * `source` - Label for the data, usually the file name
    ///
    /// # Errors
    /// Any `LoadError`; the previously active dataset stays in place
    pub fn load_csv_text(&mut self, text: &str, source: &str) -> Result<&Dataset, LoadError> {
        let collection = parse_csv(text).map_err(|e| {
            warn!("Load of '{}' failed, keeping previous dataset: {}", source, e);
            e
        })?;
        Ok(self.install(collection, source))
    }

    /// Read a CSV file and make it the active dataset
    ///
    /// # Errors
    /// Any `LoadError`; the previously active dataset stays in place
    pub fn load_csv_file(&mut self, path: impl AsRef<Path>) -> Result<&Dataset, LoadError> {
        let path = path.as_ref();
        let collection = load_csv_file(path).map_err(|e| {
            warn!("Load of {} failed, keeping previous dataset: {}", path.display(), e);
            e
        })?;
        let source = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(self.install(collection, &source))
    }

    fn install(&mut self, collection: MatchCollection, source: &str) -> &Dataset {
        self.next_id += 1;
        self.cache.clear();
        info!(
            "Loaded {} matches from '{}' (dataset #{})",
            collection.len(),
            source,
            self.next_id
        );
        self.dataset.insert(Dataset::new(self.next_id, source, collection))
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn set_position_filter(&mut self, filter: PositionFilter) {
        self.selection.position = filter;
    }

    pub fn set_metric(&mut self, metric: Option<String>) {
        self.selection.metric = metric;
    }

    /// Active dataset and cache together, for memoized queries
    pub fn analysis(&mut self) -> Option<(&Dataset, &mut AnalysisCache)> {
        let dataset = self.dataset.as_ref()?;
        Some((dataset, &mut self.cache))
    }

    pub fn cache(&self) -> &AnalysisCache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reload_replaces_dataset() {
        let mut session = Session::new();
        let first_id = session.load_csv_text("Distance\n1\n", "a.csv").unwrap().id();
        let second_id = session.load_csv_text("Distance\n2\n3\n", "b.csv").unwrap().id();

        assert_ne!(first_id, second_id);
        let dataset = session.dataset().unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.source(), "b.csv");
    }

    #[test]
    fn test_failed_load_keeps_previous() {
        let mut session = Session::new();
        session.load_csv_text("Distance\n1\n", "a.csv").unwrap();

        assert!(session.load_csv_text("Distance\n", "empty.csv").is_err());
        assert_eq!(session.dataset().unwrap().source(), "a.csv");
    }

    #[test]
    fn test_reload_clears_cache() {
        let mut session = Session::new();
        session.load_csv_text("Distance\n1\n", "a.csv").unwrap();
        {
            let (dataset, cache) = session.analysis().unwrap();
            cache.aggregate(dataset, "Distance", &PositionFilter::All);
        }
        assert_eq!(session.cache().len(), 1);

        session.load_csv_text("Distance\n5\n", "b.csv").unwrap();
        assert!(session.cache().is_empty());
    }

    #[test]
    fn test_selection_is_separate() {
        let mut session = Session::new();
        session.set_position_filter(PositionFilter::Only("CM".into()));
        session.set_metric(Some("distance".into()));

        assert!(session.dataset().is_none());
        assert_eq!(session.selection().metric.as_deref(), Some("distance"));
        assert!(session.analysis().is_none());
    }
}
