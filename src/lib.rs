#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::collector::Collector;
pub use crate::core::engine::{AbortReason, RegistroEngine, RunReport, RunState};
pub use crate::core::exporters::{
    export_json, export_xml, export_yaml, ExportReport, JsonExporter, XmlExporter, YamlExporter,
};
pub use crate::core::summary::print_summary;
pub use crate::domain::model::Docente;
pub use crate::domain::ports::{ExportFormat, Exporter};
pub use crate::utils::error::{RegistroError, Result};
