//! Exportable report bundling the engine's main outputs.

pub mod builder;
pub mod schema;

pub use builder::build_report;
pub use schema::PlayerReport;
