use std::time::Duration;

use anyhow::bail;
use clap::{Parser, Subcommand};
use tokio::sync::mpsc;

use iss_core::{
    Action, Config, IssPosition, IssState, WhereTheIssApi, geocoder_from_config,
    position_api_from_config, reduce, request_address, request_position,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "iss", version, about = "Track the International Space Station")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the Google geocoding API key.
    Configure,

    /// Show the satellite's current position.
    Position {
        /// NORAD catalog id; the ISS if omitted.
        #[arg(long)]
        satellite: Option<u32>,

        /// Refresh every N seconds until interrupted.
        #[arg(long, value_name = "SECONDS")]
        watch: Option<u64>,
    },

    /// Show the current position and the street addresses beneath it.
    Locate {
        /// NORAD catalog id; the ISS if omitted.
        #[arg(long)]
        satellite: Option<u32>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Position { satellite, watch } => position(satellite, watch).await,
            Command::Locate { satellite } => locate(satellite).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key =
        inquire::Password::new("Google geocoding API key:").without_confirmation().prompt()?;

    config.set_geocoding_api_key(api_key);
    config.save()?;

    println!("Saved geocoding credentials to {}", Config::config_file_path()?.display());
    Ok(())
}

fn api_for(config: &Config, satellite: Option<u32>) -> WhereTheIssApi {
    match satellite {
        Some(id) => WhereTheIssApi::new(id),
        None => position_api_from_config(config),
    }
}

/// Drain everything the action creators dispatched into the store slice.
fn fold(rx: &mut mpsc::UnboundedReceiver<Action>, state: &mut IssState) {
    while let Ok(action) = rx.try_recv() {
        reduce(state, action);
    }
}

/// Run one position request through the store and fold it into `state`.
async fn dispatch_position(api: &WhereTheIssApi, state: &mut IssState) {
    let (tx, mut rx) = mpsc::unbounded_channel();
    request_position(api, &tx).await;
    fold(&mut rx, state);
}

async fn position(satellite: Option<u32>, watch: Option<u64>) -> anyhow::Result<()> {
    let config = Config::load()?;
    let api = api_for(&config, satellite);
    let mut state = IssState::default();

    let Some(secs) = watch else {
        dispatch_position(&api, &mut state).await;
        print_position(&state)?;
        return Ok(());
    };

    let mut ticker = tokio::time::interval(Duration::from_secs(secs.max(1)));
    loop {
        ticker.tick().await;
        dispatch_position(&api, &mut state).await;

        let stamp = chrono::Local::now().format("%H:%M:%S");
        match (&state.error, &state.position) {
            (Some(message), _) => eprintln!("{stamp}  {message}"),
            (None, Some(p)) => {
                println!("{stamp}  lat {:>9.4}  lon {:>9.4}", p.latitude, p.longitude);
            }
            (None, None) => {}
        }
    }
}

async fn locate(satellite: Option<u32>) -> anyhow::Result<()> {
    let config = Config::load()?;
    // Resolve the geocoder first so a missing API key fails before any request.
    let geocoder = geocoder_from_config(&config)?;
    let api = api_for(&config, satellite);

    let mut state = IssState::default();
    let (tx, mut rx) = mpsc::unbounded_channel();

    request_position(&api, &tx).await;
    fold(&mut rx, &mut state);
    let position = print_position(&state)?;

    request_address(&geocoder, position.latitude, position.longitude, &tx).await;
    fold(&mut rx, &mut state);

    if let Some(message) = &state.error {
        bail!("{message}");
    }

    if state.addresses.is_empty() {
        println!("No addresses found for this position (probably over water).");
        return Ok(());
    }

    println!("Nearest addresses:");
    for address in &state.addresses {
        println!("  - {}", address.formatted_address);
    }

    Ok(())
}

fn print_position(state: &IssState) -> anyhow::Result<IssPosition> {
    if let Some(message) = &state.error {
        bail!("{message}");
    }

    match state.position {
        Some(position) => {
            println!("latitude:  {:>9.4}", position.latitude);
            println!("longitude: {:>9.4}", position.longitude);
            Ok(position)
        }
        None => bail!("The position request produced no result"),
    }
}
