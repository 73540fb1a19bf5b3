//! vmgraph - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use vmgraph::integration::{run_script, OutputFormat, Script};
use vmgraph::state::{ContentMode, DeviceMode, PresenterEvent};

/// Replay presenter events against the view-model graph and print each frame
#[derive(Parser, Debug)]
#[command(name = "vmgraph")]
#[command(version)]
#[command(about = "Versioned observable view-model graph driver")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial device mode
    #[arg(long, value_enum)]
    pub device_mode: Option<DeviceMode>,

    /// Initial content mode
    #[arg(long, value_enum)]
    pub content_mode: Option<ContentMode>,

    /// Event to replay after the initial frame (repeatable, applied in order)
    #[arg(long = "toggle", value_enum)]
    pub toggles: Vec<PresenterEvent>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Width of the off-screen buffer in cells
    #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(u16).range(1..))]
    pub width: u16,

    /// Height of the off-screen buffer in cells
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u16).range(1..))]
    pub height: u16,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = vmgraph::config::load_config_with_precedence(args.config.clone())?;
        let merged = vmgraph::config::merge_config(config_file);
        let with_env = vmgraph::config::apply_env_overrides(merged);
        vmgraph::config::apply_cli_overrides(
            with_env,
            vmgraph::config::CliOverrides {
                device_mode: args.device_mode,
                content_mode: args.content_mode,
            },
        )
    };

    vmgraph::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let script = Script {
        events: args.toggles,
        format: args.format,
        width: args.width,
        height: args.height,
    };

    let stdout = std::io::stdout();
    let summary = run_script(&config.screen, &script, &mut stdout.lock())?;
    info!(frames = summary.frames, stats = ?summary.stats, "script finished");

    Ok(())
}
