use std::io::{self, IsTerminal};

use anyhow::Context;
use config::SimulationConfig;
use log::{LevelFilter, debug, info};
use rand::{SeedableRng, rngs::StdRng};
use simple_logger::SimpleLogger;
use ticker::Ticker;

mod config;
mod renderer;
mod ticker;

fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
        .context("Initializing logger")?;

    info!("Starting life-console v{}", env!("CARGO_PKG_VERSION"));

    let config = SimulationConfig::default();
    debug!("Config: {}", serde_json::to_string(&config)?);

    // Seeded once; every tile draws from this generator.
    let mut rng = StdRng::from_os_rng();
    let mut ticker = Ticker::new(config, &mut rng)?;

    let stdout = io::stdout();
    let clear_screen = stdout.is_terminal();
    let mut out = stdout.lock();

    ticker.run(&mut out, clear_screen)?;

    info!("Finished after {} generations", ticker.game.generation);
    Ok(())
}
