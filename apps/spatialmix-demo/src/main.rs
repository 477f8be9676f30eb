//! spatialmix demo session
//!
//! Moves a simulated listener around a circle, diffs each snapshot against
//! what the mixer already knows and reports how much smaller the updates are
//! than full snapshots. Simulated peers are tracked from their updates.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p spatialmix-demo -- [OPTIONS]
//! ```
//!
//! ## Options
//!
//! - `--steps <N>`: Update cycles to simulate (default: 36)
//! - `--radius <M>`: Orbit radius in meters (default: 2.0)
//! - `--height <M>`: Listener height in meters (default: 1.7)
//! - `--order <ORDER>`: Euler order, `YawPitchRoll` or `RollYawPitch`
//! - `--peers <N>`: Simulated peers (default: 3)
//! - `--gain-every <N>`: Toggle gain every N steps, 0 to disable (default: 8)
//! - `-h, --help`: Print help message
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace)

mod config;
mod session;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;
use crate::session::Session;

fn main() -> anyhow::Result<()> {
    // Check for help flag before doing anything else
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print_help();
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = DemoConfig::from_args()?;
    info!(
        steps = config.steps,
        radius = config.radius,
        order = %config.order,
        peers = config.peers,
        "starting demo session"
    );

    let summary = Session::new(config).run()?;
    if summary.snapshot_bytes > 0 {
        #[allow(clippy::cast_precision_loss)]
        let ratio = summary.delta_bytes as f64 / summary.snapshot_bytes as f64;
        info!("updates used {:.1}% of full snapshot bytes", ratio * 100.0);
    }

    Ok(())
}

fn print_help() {
    eprintln!(
        "spatialmix demo session

USAGE:
    cargo run -p spatialmix-demo -- [OPTIONS]

OPTIONS:
    --steps <N>         Update cycles to simulate (default: 36)
    --radius <M>        Orbit radius in meters (default: 2.0)
    --height <M>        Listener height in meters (default: 1.7)
    --order <ORDER>     Euler order: YawPitchRoll or RollYawPitch
                        (default: YawPitchRoll)
    --peers <N>         Simulated peers (default: 3)
    --gain-every <N>    Toggle gain every N steps, 0 to disable (default: 8)
    -h, --help          Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG            Set log level (e.g., info, debug, trace)"
    );
}
