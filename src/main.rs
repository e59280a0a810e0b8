use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use waypoint::core::config::{self, CliOverrides};
use waypoint::tui;

#[derive(Parser)]
#[command(name = "waypoint", about = "Stack-and-modal navigation demo shell")]
struct Args {
    /// Where to save/restore navigation state (default: ~/.waypoint/state.json)
    #[arg(long)]
    state_file: Option<PathBuf>,

    /// Start from empty stacks instead of restoring the last session
    #[arg(long)]
    fresh: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("waypoint: {e}, using defaults");
        config::WaypointConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            state_file: args.state_file,
            fresh: args.fresh,
        },
    );

    // Initialize file logger
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!(
        "Waypoint starting up (tabs={:?}, restore={}, state_file={:?})",
        resolved.tabs,
        resolved.restore_on_start,
        resolved.state_file
    );

    tui::run(resolved)
}
