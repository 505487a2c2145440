//! Taskbar capability prober and demo control panel.
//!
//! On startup the prober queries the linked backends; when none is
//! available a notice is printed and the process exits without opening a
//! window. Otherwise the supported capability subset is reported and the
//! control panel opens with one widget section per supported capability.

pub mod panel;
pub mod probe;
mod resource;

use anyhow::anyhow;
use clap::{Parser, ValueEnum};

// Linked for their taskbar registrations.
#[cfg(target_os = "linux")]
use dockpilot_platform_linux as _;
#[cfg(feature = "mock-taskbar")]
use dockpilot_platform_mock as _;
#[cfg(target_os = "windows")]
use dockpilot_platform_windows as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "dockpilot-control-panel", version, about)]
struct Cli {
    /// Print the capability report and exit without opening the panel.
    #[arg(long)]
    probe: bool,

    /// Capability report format.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log filter when RUST_LOG is not set (e.g. "debug").
    #[arg(long, default_value = "warn")]
    log_level: String,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let Some(taskbar) = dockpilot_core::acquire() else {
        println!("{}", probe::UNSUPPORTED_NOTICE);
        return Ok(());
    };

    let report = probe::ProbeReport::capture(taskbar);
    match cli.format {
        OutputFormat::Text => println!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", report.render_json()?),
    }
    if cli.probe {
        return Ok(());
    }

    panel::show(taskbar).map_err(|error| anyhow!("{error}"))
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow!("failed to initialize tracing: {error}"))
}
