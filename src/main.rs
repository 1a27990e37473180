//! Replay a recorded resize script and print the per-step report as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use panel_resize::constants::DEFAULT_LOG_DIRECTIVE;
use panel_resize::replay::ReplayScript;
use panel_resize::{logging, ResizeConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "panel-resize-replay", version, about = "Replay a resize gesture script")]
struct Args {
    /// Script file (JSON)
    script: PathBuf,

    /// Config file overriding the script's own config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = DEFAULT_LOG_DIRECTIVE)]
    log: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(&args.log);

    let mut script = ReplayScript::load(&args.script)
        .with_context(|| format!("loading script {}", args.script.display()))?;
    if let Some(path) = &args.config {
        script.config = ResizeConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?;
    }

    let report = script.run().context("replaying script")?;
    tracing::info!(
        steps = report.frames.len(),
        bindings = report.bindings,
        "replay complete"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
