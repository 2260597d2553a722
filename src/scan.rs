// src/scan.rs
use log::debug;

use crate::error::MissingRange;
use crate::range::{parse_range, Range};

/// Both parameter ranges for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sweep {
  pub phmin: Range,
  pub phmax: Range,
}

/// Ranges found while scanning, before presence is checked.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScannedRanges {
  pub phmin: Option<Range>,
  pub phmax: Option<Range>,
}

impl ScannedRanges {
  /// `phmax` is checked before `phmin`.
  pub fn into_sweep(self) -> Result<Sweep, MissingRange> {
    let phmax = self.phmax.ok_or(MissingRange::Phmax)?;
    let phmin = self.phmin.ok_or(MissingRange::Phmin)?;
    Ok(Sweep { phmin, phmax })
  }
}

/// Scans range arguments (program name already removed). An argument
/// containing `phmin` sets the phmin range, one containing `phmax` sets the
/// phmax range; a single argument can set both and the last match wins.
pub fn scan_arguments<I, S>(args: I) -> ScannedRanges
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  let mut scanned = ScannedRanges::default();
  for arg in args {
    let arg = arg.as_ref();
    if arg.contains("phmin") {
      let range = parse_range(arg);
      debug!("phmin argument '{}' -> {:?}", arg, range);
      scanned.phmin = Some(range);
    }
    if arg.contains("phmax") {
      let range = parse_range(arg);
      debug!("phmax argument '{}' -> {:?}", arg, range);
      scanned.phmax = Some(range);
    }
  }
  scanned
}
