pub mod collector;
pub mod engine;
pub mod exporters;
pub mod summary;

pub use crate::domain::model::Docente;
pub use crate::domain::ports::{ExportFormat, Exporter};
pub use crate::utils::error::Result;
