//! Headless runner (default binary).
//!
//! Plays one game with scripted or seeded-random directions and prints a JSON
//! summary line. There is no rendering and no keyboard handling; set
//! `RUST_LOG=debug` to follow the game move by move.

use anyhow::Result;
use clap::Parser;

use tile512::runner::{run, RunConfig};

fn main() -> Result<()> {
    env_logger::init();

    let config = RunConfig::parse();
    let report = run(&config)?;
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
