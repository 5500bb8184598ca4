//! viability-audit: deterministic startup viability reports.
//!
//! One-shot binary that:
//! 1. Assembles an audit request from flags and/or a captured JSON document
//! 2. Runs the scoring engine over it
//! 3. Renders the report as text or JSON

mod config;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use audit_engine::AuditEngine;
use common::{AuditRequest, Error};

use crate::config::AppConfig;

/// Startup viability audit
#[derive(Parser)]
#[command(name = "viability-audit", about = "Deterministic startup viability report")]
struct Cli {
    /// Projected monthly cash outflow.
    #[arg(long)]
    burn: Option<f64>,

    /// Target customer-acquisition cost.
    #[arg(long)]
    cac: Option<f64>,

    /// Stated assumption; repeat the flag to state several.
    #[arg(long = "assumption")]
    assumptions: Vec<String>,

    /// Project display name (pass-through, not scored).
    #[arg(long)]
    project: Option<String>,

    /// Elevator pitch (pass-through, not scored).
    #[arg(long)]
    pitch: Option<String>,

    /// Read a full audit request document (JSON, camelCase fields).
    /// Flags override individual fields of the document.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Seed the forecast jitter for exactly reproducible chart data.
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the report as pretty JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Config file path.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

/// Build the request from the document (if any), then layer flag overrides.
fn load_request(cli: &Cli) -> common::Result<AuditRequest> {
    let mut request = match &cli.input {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str(&raw)?
        }
        None => AuditRequest::default(),
    };

    if let Some(project) = &cli.project {
        request.project_name = project.clone();
    }
    if let Some(pitch) = &cli.pitch {
        request.elevator_pitch = pitch.clone();
    }
    if !cli.assumptions.is_empty() {
        request.assumptions = cli.assumptions.clone();
    }
    if let Some(burn) = cli.burn {
        request.monthly_burn = burn;
    }
    if let Some(cac) = cli.cac {
        request.target_cac = cac;
    }

    // The engine coerces anyway; the front-end is where bad numbers should
    // stop with a readable message.
    for (label, value) in [("burn", request.monthly_burn), ("cac", request.target_cac)] {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidRequest(format!(
                "{} must be a finite non-negative number, got {}",
                label, value
            )));
        }
    }

    Ok(request)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("loading config {}", cli.config.display()))?;
    let request = load_request(&cli).context("assembling audit request")?;

    info!(
        project = %request.project_name,
        burn = request.monthly_burn,
        cac = request.target_cac,
        assumptions = request.assumptions.len(),
        "running viability audit"
    );

    let engine = AuditEngine::new(config.engine.clone());
    let report = match cli.seed {
        Some(seed) => engine.evaluate(&request, &mut StdRng::seed_from_u64(seed)),
        None => engine.evaluate(&request, &mut rand::thread_rng()),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::render_text(&request, &report, &config.output));
    }

    Ok(())
}
