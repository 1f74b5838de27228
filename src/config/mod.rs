use crate::core::ExportFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "registro-docentes")]
#[command(about = "Registers teachers interactively and exports them to JSON, YAML and XML")]
pub struct CliConfig {
    #[arg(long, default_value = ".", help = "Directory where the output files are written")]
    pub output_dir: String,

    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        help = "Formats to export (default: all)"
    )]
    pub formats: Vec<ExportFormat>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Selected formats in the order given, without duplicates.
    pub fn selected_formats(&self) -> Vec<ExportFormat> {
        if self.formats.is_empty() {
            return ExportFormat::ALL.to_vec();
        }

        let mut selected = Vec::with_capacity(self.formats.len());
        for format in &self.formats {
            if !selected.contains(format) {
                selected.push(*format);
            }
        }
        selected
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_dir", &self.output_dir)
    }
}
