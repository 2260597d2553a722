// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhtestError {
  #[error("IO Error: {0}")]
  Io(#[from] std::io::Error),
}

/// A required range argument was not found on the command line.
///
/// The display text is the exact message written to stdout.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingRange {
  #[error("no phmax range given")]
  Phmax,

  #[error("no phmin range given")]
  Phmin,
}
