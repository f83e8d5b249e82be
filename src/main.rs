use anyhow::{Context, Result};
use namecodec::{progress::BarProgress, Pipeline, PipelineConfig};
use std::env;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) configure ────────────────────────────────────────────────
    let config = PipelineConfig::from_args(env::args().skip(1))?;
    info!(
        input = %config.input_path.display(),
        output = %config.output_path.display(),
        name_column = %config.columns.name,
        label_column = %config.columns.label,
        "startup"
    );

    // ─── 3) load, encode, write ──────────────────────────────────────
    let input = config.input_path.clone();
    let output = config.output_path.clone();
    let summary = Pipeline::with_progress(config, Box::new(BarProgress::new()))
        .run()
        .with_context(|| format!("encoding {} → {}", input.display(), output.display()))?;

    info!(
        rows = summary.rows,
        width = summary.width,
        classes = summary.classes,
        "all done"
    );
    Ok(())
}
