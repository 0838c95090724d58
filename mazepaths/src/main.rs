//! Command-line front end.
//!
//! Run: cargo run -- --scenario ring

use std::io;

use clap::Parser;
use log::LevelFilter;
use mazepaths::{Args, Config};

fn main() {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let config = Config::from(args);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = mazepaths::run(&config, &mut out) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
