use channel_migrate::{Dependencies, MigrationError, source};
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Main entry point for the channel migration.
///
/// Initializes tracing and dotenv, wires the application dependencies, reads
/// the grouped source export, and runs the orchestrator over it. Per-entity
/// failures end up in the report, not in the exit status; only setup and
/// reset failures abort the process.
///
/// # Returns
///
/// A `Result` indicating success or a `MigrationError` if an error occurs
/// during initialization or the run.
#[tokio::main]
async fn main() -> Result<(), MigrationError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();
    dotenv().ok();

    let dependencies = Dependencies::new().await?;

    let entities = source::read_entities(&dependencies.source_export)?;
    info!(
        "Loaded {} source entities from {}",
        entities.len(),
        dependencies.source_export.display()
    );

    let report = dependencies.orchestrator.run(&entities).await?;

    info!(
        ok = report.ok.len(),
        failed = report.failed.len(),
        "migration finished",
    );
    if report.has_failures() {
        warn!("failed source user ids: {:?}", report.failed);
    }
    Ok(())
}
