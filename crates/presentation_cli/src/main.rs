//! Weather display station CLI
//!
//! `inkstation run` starts the refresh loop against the panel or the
//! simulator window; `inkstation scores` prints the current scoreboard.

#![allow(clippy::print_stdout)]

mod scores;

use anyhow::Context;
use clap::{Parser, Subcommand};
use infrastructure::AppConfig;
use integration_scoreboard::GameState;
use integration_weather::OpenMeteoClient;
use tracing::info;

/// Weather e-paper display station
#[derive(Parser)]
#[command(name = "inkstation")]
#[command(author, version, about = "Weather e-paper display station", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the display refresh loop (default)
    Run {
        /// Config file stem, e.g. "config" for config.toml
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Print the current scoreboard to the console
    Scores {
        /// Game state to show: pre, in or post
        #[arg(short, long, default_value = "in")]
        state: GameState,

        /// Config file stem, e.g. "config" for config.toml
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn load_config(path: Option<&str>) -> anyhow::Result<AppConfig> {
    let config = match path {
        Some(stem) => AppConfig::load_from(stem),
        None => AppConfig::load(),
    };
    config.context("loading configuration")
}

// The runtime is built by hand so the simulator window, which SDL insists
// on running on the main thread, is not trapped inside an async main.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    infrastructure::init_tracing(cli.verbose);

    let runtime = tokio::runtime::Runtime::new().context("starting async runtime")?;

    match cli.command {
        Some(Commands::Scores { state, config }) => {
            let config = load_config(config.as_deref())?;
            runtime.block_on(scores::run(&config.scoreboard, state))
        },
        Some(Commands::Run { config }) => {
            let config = load_config(config.as_deref())?;
            run_station(&runtime, config)
        },
        None => {
            let config = load_config(None)?;
            run_station(&runtime, config)
        },
    }
}

fn run_station(runtime: &tokio::runtime::Runtime, config: AppConfig) -> anyhow::Result<()> {
    let timezone = config.timezone()?;
    let units = config.weather.units;
    let client = OpenMeteoClient::new(config.weather.clone()).context("building weather client")?;

    if display::hardware_detected() {
        run_on_panel(runtime, client, &config, units, timezone)
    } else {
        run_in_simulator(runtime, client, &config, units, timezone)
    }
}

#[cfg(feature = "panel")]
fn run_on_panel(
    runtime: &tokio::runtime::Runtime,
    client: OpenMeteoClient,
    config: &AppConfig,
    units: domain::Units,
    timezone: chrono_tz::Tz,
) -> anyhow::Result<()> {
    use display::{HardwareSink, WaveshareDevice};

    info!("Panel host detected, driving the e-paper display");
    let device = WaveshareDevice::open().context("opening e-paper panel")?;
    let mut service = application::TickService::new(
        client,
        HardwareSink::new(device),
        config.retry.clone(),
        config.location.latitude,
        config.location.longitude,
        units,
        timezone,
    );

    runtime.block_on(application::run_loop(&mut service));
    Ok(())
}

#[cfg(not(feature = "panel"))]
fn run_on_panel(
    _runtime: &tokio::runtime::Runtime,
    _client: OpenMeteoClient,
    _config: &AppConfig,
    _units: domain::Units,
    _timezone: chrono_tz::Tz,
) -> anyhow::Result<()> {
    anyhow::bail!("this binary was built without panel support; rebuild with --features panel")
}

#[cfg(feature = "simulator")]
fn run_in_simulator(
    runtime: &tokio::runtime::Runtime,
    client: OpenMeteoClient,
    config: &AppConfig,
    units: domain::Units,
    timezone: chrono_tz::Tz,
) -> anyhow::Result<()> {
    use display::{SimulationShell, SimulationSink};

    info!("No panel host detected, opening the simulator window");
    let (sink, receiver) = SimulationSink::channel();
    let mut service = application::TickService::new(
        client,
        sink,
        config.retry.clone(),
        config.location.latitude,
        config.location.longitude,
        units,
        timezone,
    );

    let pipeline = runtime.spawn(async move {
        application::run_loop(&mut service).await;
    });

    // Blocks the main thread until the window is closed
    SimulationShell::new(receiver, "inkstation").run();
    pipeline.abort();
    Ok(())
}

#[cfg(not(feature = "simulator"))]
fn run_in_simulator(
    _runtime: &tokio::runtime::Runtime,
    _client: OpenMeteoClient,
    _config: &AppConfig,
    _units: domain::Units,
    _timezone: chrono_tz::Tz,
) -> anyhow::Result<()> {
    anyhow::bail!(
        "this binary was built without simulator support; rebuild with --features simulator"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_defaults_to_run() {
        let cli = Cli::parse_from(["inkstation"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn scores_parses_state_aliases() {
        let cli = Cli::parse_from(["inkstation", "scores", "--state", "live"]);
        match cli.command {
            Some(Commands::Scores { state, .. }) => assert_eq!(state, GameState::In),
            _ => panic!("expected scores subcommand"),
        }
    }

    #[test]
    fn run_accepts_a_config_stem() {
        let cli = Cli::parse_from(["inkstation", "run", "--config", "station"]);
        match cli.command {
            Some(Commands::Run { config }) => assert_eq!(config.as_deref(), Some("station")),
            _ => panic!("expected run subcommand"),
        }
    }
}
