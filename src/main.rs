// src/main.rs
mod card;
mod cli;
mod error;
mod range;
mod scan;

use std::io::{self, BufWriter};

use clap::Parser;
use cli::Cli;
use error::PhtestError;
use log::LevelFilter;

use card::DacSettings;

fn main() -> Result<(), PhtestError> {
  let cli = Cli::parse();

  // Stdout carries the cards, so logging stays on stderr and quiet by default
  let log_level = match cli.verbose {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Info,
    2 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };
  env_logger::Builder::new().filter_level(log_level).init();

  log::debug!("CLI args: {:?}", cli);

  let sweep = match scan::scan_arguments(&cli.ranges).into_sweep() {
    Ok(sweep) => sweep,
    Err(missing) => {
      log::info!("Nothing generated: {}", missing);
      println!("{}", missing);
      return Ok(());
    }
  };

  let dacs = DacSettings {
    phoffset: cli.phoffset,
    phscale: cli.phscale,
  };

  let stdout = io::stdout();
  let mut out = BufWriter::new(stdout.lock());
  card::write_cards(&mut out, sweep, dacs)?;

  Ok(())
}
