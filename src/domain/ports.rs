use crate::domain::model::Docente;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    Json,
    Yaml,
    Xml,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Json, ExportFormat::Yaml, ExportFormat::Xml];

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Yaml => "YAML",
            ExportFormat::Xml => "XML",
        }
    }

    pub fn default_file_name(&self) -> &'static str {
        match self {
            ExportFormat::Json => "docentes.json",
            ExportFormat::Yaml => "docentes.yaml",
            ExportFormat::Xml => "docentes.xml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Turns the frozen record list into one on-disk format.
#[async_trait]
pub trait Exporter: Send + Sync {
    fn format(&self) -> ExportFormat;

    fn render(&self, records: &[Docente]) -> Result<Vec<u8>>;

    /// Renders and overwrites `path`.
    async fn export(&self, records: &[Docente], path: &Path) -> Result<()> {
        let data = self.render(records)?;
        tokio::fs::write(path, data).await?;
        Ok(())
    }
}
