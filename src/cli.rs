// src/cli.rs
use clap::Parser;

use crate::card::{DEFAULT_PHOFFSET, DEFAULT_PHSCALE};

#[derive(Parser, Debug)]
#[command(
    name = "phtest", // Command name users type
    author,
    version,
    about = "Generates pulse-height optimisation test cards over phmin/phmax ranges.",
    long_about = None,
    after_help = "Example: phtest phmin=2..10 phmax=247..255 > phtest"
)]
pub struct Cli {
  /// Increase verbosity level on stderr (e.g., -v, -vv)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Value written on the `setdac phoffset` line of every card
  #[arg(long, default_value_t = DEFAULT_PHOFFSET)]
  #[clap(env = "PHTEST_PHOFFSET")]
  pub phoffset: i64,

  /// Value written on the `setdac phscale` line of every card
  #[arg(long, default_value_t = DEFAULT_PHSCALE)]
  #[clap(env = "PHTEST_PHSCALE")]
  pub phscale: i64,

  /// Range arguments, e.g. phmin=2..10 phmax=247..255
  #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
  pub ranges: Vec<String>,
}
