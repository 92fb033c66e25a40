//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::BreakevenPaths;
pub use settings::{ExportFormat, Settings};
