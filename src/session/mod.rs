//! Session state: the active dataset, the user's selection and the
//! memoization cache for derived values.

pub mod cache;
pub mod dataset;
pub mod state;

pub use cache::AnalysisCache;
pub use dataset::{Dataset, DatasetId};
pub use state::{Selection, Session};
