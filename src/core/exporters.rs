use crate::domain::model::Docente;
use crate::domain::ports::{ExportFormat, Exporter};
use crate::utils::error::{RegistroError, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Serialize;
use std::path::{Path, PathBuf};

const XML_ROOT: &str = "docentes";
const XML_ITEM: &str = "docente";

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlExporter;

#[derive(Debug, Clone, Copy, Default)]
pub struct XmlExporter;

impl Exporter for JsonExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn render(&self, records: &[Docente]) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records.serialize(&mut serializer)?;
        Ok(buf)
    }
}

impl Exporter for YamlExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Yaml
    }

    fn render(&self, records: &[Docente]) -> Result<Vec<u8>> {
        Ok(serde_yaml::to_string(records)?.into_bytes())
    }
}

impl Exporter for XmlExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Xml
    }

    fn render(&self, records: &[Docente]) -> Result<Vec<u8>> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_error)?;

        if records.is_empty() {
            writer
                .write_event(Event::Empty(BytesStart::new(XML_ROOT)))
                .map_err(xml_error)?;
        } else {
            writer
                .write_event(Event::Start(BytesStart::new(XML_ROOT)))
                .map_err(xml_error)?;
            for docente in records {
                writer
                    .write_event(Event::Start(BytesStart::new(XML_ITEM)))
                    .map_err(xml_error)?;
                write_text_element(&mut writer, "nombre", docente.name())?;
                write_text_element(&mut writer, "especialidad", docente.specialty())?;
                write_text_element(
                    &mut writer,
                    "numero_empleado",
                    &docente.employee_number().to_string(),
                )?;
                writer
                    .write_event(Event::End(BytesEnd::new(XML_ITEM)))
                    .map_err(xml_error)?;
            }
            writer
                .write_event(Event::End(BytesEnd::new(XML_ROOT)))
                .map_err(xml_error)?;
        }

        let mut xml = writer.into_inner();
        xml.push(b'\n');
        Ok(xml)
    }
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, tag: &str, text: &str) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new(tag)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::End(BytesEnd::new(tag)))
        .map_err(xml_error)?;
    Ok(())
}

fn xml_error<E: std::fmt::Display>(e: E) -> RegistroError {
    RegistroError::XmlError {
        message: e.to_string(),
    }
}

/// The exporter registered for `format`.
pub fn exporter_for(format: ExportFormat) -> Box<dyn Exporter> {
    match format {
        ExportFormat::Json => Box::new(JsonExporter),
        ExportFormat::Yaml => Box::new(YamlExporter),
        ExportFormat::Xml => Box::new(XmlExporter),
    }
}

pub fn default_exporters() -> Vec<Box<dyn Exporter>> {
    ExportFormat::ALL.into_iter().map(exporter_for).collect()
}

/// Result of one exporter run. Failures are carried, never raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub format: ExportFormat,
    pub path: PathBuf,
    pub error: Option<String>,
}

impl ExportReport {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }

    pub fn message(&self) -> String {
        match &self.error {
            None => format!(
                "✓ Archivo {} generado: {}",
                self.format.label(),
                self.path.display()
            ),
            Some(detail) => format!("✗ Error al generar {}: {}", self.format.label(), detail),
        }
    }
}

/// Runs one exporter and converts any failure into a report.
pub async fn run_exporter(
    exporter: &dyn Exporter,
    records: &[Docente],
    path: &Path,
) -> ExportReport {
    let format = exporter.format();
    let error = match exporter.export(records, path).await {
        Ok(()) => {
            tracing::info!("{} export written to {}", format, path.display());
            None
        }
        Err(e) => {
            tracing::error!(
                "{} export to {} failed (Category: {:?}): {}",
                format,
                path.display(),
                e.category(),
                e
            );
            Some(e.to_string())
        }
    };

    ExportReport {
        format,
        path: path.to_path_buf(),
        error,
    }
}

async fn export_and_print(
    exporter: &dyn Exporter,
    records: &[Docente],
    path: &Path,
) -> ExportReport {
    let report = run_exporter(exporter, records, path).await;
    println!("{}", report.message());
    report
}

pub async fn export_json(records: &[Docente], path: impl AsRef<Path>) -> ExportReport {
    export_and_print(&JsonExporter, records, path.as_ref()).await
}

pub async fn export_yaml(records: &[Docente], path: impl AsRef<Path>) -> ExportReport {
    export_and_print(&YamlExporter, records, path.as_ref()).await
}

pub async fn export_xml(records: &[Docente], path: impl AsRef<Path>) -> ExportReport {
    export_and_print(&XmlExporter, records, path.as_ref()).await
}
