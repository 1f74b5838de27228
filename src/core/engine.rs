use crate::core::collector::Collector;
use crate::core::exporters::{default_exporters, run_exporter, ExportReport};
use crate::core::summary::{print_summary, RULE};
use crate::domain::ports::{ExportFormat, Exporter};
use crate::utils::error::{RegistroError, Result};
use std::future::Future;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState {
    Collecting,
    Reviewing,
    Exporting,
    Done,
    Aborted(AbortReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    NoRecords,
    Interrupted,
    Unexpected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub state: RunState,
    pub records: usize,
    pub exports: Vec<ExportReport>,
}

impl RunReport {
    fn aborted(reason: AbortReason) -> Self {
        Self {
            state: RunState::Aborted(reason),
            records: 0,
            exports: Vec::new(),
        }
    }

    pub fn failed_exports(&self) -> impl Iterator<Item = &ExportReport> {
        self.exports.iter().filter(|r| !r.succeeded())
    }

    /// Closing text shown once the run is over.
    pub fn message(&self) -> String {
        match &self.state {
            RunState::Done => {
                let written: Vec<String> = self
                    .exports
                    .iter()
                    .filter(|r| r.succeeded())
                    .map(|r| r.path.display().to_string())
                    .collect();
                let mut message = if written.is_empty() {
                    "\nProceso completado sin generar archivos.".to_string()
                } else {
                    format!(
                        "\n¡Proceso completado exitosamente!\nSe han generado los archivos: {}",
                        written.join(", ")
                    )
                };
                let failed: Vec<&str> = self.failed_exports().map(|r| r.format.label()).collect();
                if !failed.is_empty() {
                    message.push_str(&format!("\nNo se pudieron generar: {}", failed.join(", ")));
                }
                message
            }
            RunState::Aborted(AbortReason::NoRecords) => {
                "No se ingresaron docentes. El programa terminará.".to_string()
            }
            RunState::Aborted(AbortReason::Interrupted) => {
                "\n\nPrograma interrumpido por el usuario.".to_string()
            }
            RunState::Aborted(AbortReason::Unexpected(detail)) => {
                format!("\nError inesperado: {}", detail)
            }
            state => format!("Proceso detenido en estado {:?}", state),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match &self.state {
            RunState::Done | RunState::Aborted(AbortReason::NoRecords) => 0,
            RunState::Aborted(AbortReason::Interrupted) => 130,
            _ => 1,
        }
    }
}

/// Drives one run: collect, review, export.
pub struct RegistroEngine {
    exporters: Vec<Box<dyn Exporter>>,
    output_dir: PathBuf,
}

impl RegistroEngine {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self::with_exporters(default_exporters(), output_dir)
    }

    pub fn with_exporters(
        exporters: Vec<Box<dyn Exporter>>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            exporters,
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn output_path(&self, format: ExportFormat) -> PathBuf {
        self.output_dir.join(format.default_file_name())
    }

    /// Runs until completion or until `shutdown` resolves, whichever comes
    /// first. Every outcome, failures included, ends up as a `RunReport`.
    pub async fn run_until<R, W, F>(&self, input: R, output: W, shutdown: F) -> RunReport
    where
        R: BufRead + Send + 'static,
        W: Write + Send + 'static,
        F: Future<Output = ()>,
    {
        let outcome = tokio::select! {
            biased;
            _ = shutdown => Err(RegistroError::Interrupted),
            result = self.run(input, output) => result,
        };

        match outcome {
            Ok(report) => report,
            Err(e) if e.is_cancellation() => {
                tracing::warn!("Run interrupted by user");
                RunReport::aborted(AbortReason::Interrupted)
            }
            Err(e) => {
                tracing::error!("Run failed (Category: {:?}): {}", e.category(), e);
                RunReport::aborted(AbortReason::Unexpected(e.user_friendly_message()))
            }
        }
    }

    pub async fn run<R, W>(&self, input: R, output: W) -> Result<RunReport>
    where
        R: BufRead + Send + 'static,
        W: Write + Send + 'static,
    {
        let mut state = RunState::Collecting;
        tracing::debug!("State: {:?}", state);

        // Terminal reads block, so collection runs off the async workers.
        let mut collector = Collector::new(input, output);
        let (collected, mut output) = tokio::task::spawn_blocking(move || {
            let collected = collector.collect();
            (collected, collector.into_output())
        })
        .await?;
        let docentes = collected?;

        if docentes.is_empty() {
            transition(&mut state, RunState::Aborted(AbortReason::NoRecords));
            return Ok(RunReport::aborted(AbortReason::NoRecords));
        }

        transition(&mut state, RunState::Reviewing);
        print_summary(&docentes, &mut output).map_err(RegistroError::TerminalError)?;

        transition(&mut state, RunState::Exporting);
        writeln!(output, "\n{}\nGENERANDO ARCHIVOS...\n{}", RULE, RULE)
            .map_err(RegistroError::TerminalError)?;

        if let Err(e) = tokio::fs::create_dir_all(&self.output_dir).await {
            tracing::warn!(
                "Could not create output directory {}: {}",
                self.output_dir.display(),
                e
            );
        }

        let mut exports = Vec::with_capacity(self.exporters.len());
        for exporter in &self.exporters {
            let path = self.output_path(exporter.format());
            let report = run_exporter(exporter.as_ref(), &docentes, &path).await;
            writeln!(output, "{}", report.message()).map_err(RegistroError::TerminalError)?;
            exports.push(report);
        }
        output.flush().map_err(RegistroError::TerminalError)?;

        transition(&mut state, RunState::Done);
        Ok(RunReport {
            state,
            records: docentes.len(),
            exports,
        })
    }
}

fn transition(state: &mut RunState, next: RunState) {
    tracing::debug!("State: {:?} -> {:?}", state, next);
    *state = next;
}
