use anyhow::Result;
use ast_graph::{config, run_batch};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    // Optional: a missing .env is fine, everything has defaults.
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,ast_graph=info"))?;

    fmt().with_env_filter(filter).with_target(false).init();

    let cfg = config::load_from_env_or_default()?;
    info!(
        input = %cfg.paths.input_dir.display(),
        output = %cfg.paths.output_dir.display(),
        format = %cfg.output.format,
        "Configuration loaded"
    );

    let report = run_batch(&cfg)?;
    for failure in report.failures() {
        warn!(source = failure.source(), "No artifact written");
    }

    Ok(())
}
