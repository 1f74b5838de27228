use anyhow::Context;
use clap::Parser;
use registro_docentes::core::exporters::exporter_for;
use registro_docentes::utils::{logger, validation::Validate};
use registro_docentes::{CliConfig, RegistroEngine};
use std::io::{BufReader, Write};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting registro-docentes");
    tracing::debug!("CLI config: {:?}", config);

    config.validate().context("invalid configuration")?;

    println!("SISTEMA DE GESTIÓN DE DOCENTES - EDIFICIO 2");
    println!(
        "Este programa permitirá registrar docentes y generar archivos en múltiples formatos.\n"
    );

    let exporters = config
        .selected_formats()
        .into_iter()
        .map(exporter_for)
        .collect();
    let engine = RegistroEngine::with_exporters(exporters, &config.output_dir);

    // Without a Ctrl-C handler the run simply never gets cancelled.
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Could not listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    let report = engine
        .run_until(
            BufReader::new(std::io::stdin()),
            std::io::stdout(),
            shutdown,
        )
        .await;

    tracing::info!("Run finished in state {:?}", report.state);
    println!("{}", report.message());
    std::io::stdout().flush()?;

    // A cancelled run may still have a blocking stdin read in flight, so the
    // process exits here instead of waiting for the runtime to drain.
    std::process::exit(report.exit_code());
}
