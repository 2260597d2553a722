// src/card.rs
use std::fmt;
use std::io::Write;

use log::{info, trace};

use crate::error::PhtestError;
use crate::scan::Sweep;

pub const DEFAULT_PHOFFSET: i64 = 185;
pub const DEFAULT_PHSCALE: i64 = 65;

/// Terminates the card stream.
pub const QUIT_MARKER: &str = "q";

/// DAC values written at the top of every card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DacSettings {
  pub phoffset: i64,
  pub phscale: i64,
}

impl Default for DacSettings {
  fn default() -> Self {
    DacSettings {
      phoffset: DEFAULT_PHOFFSET,
      phscale: DEFAULT_PHSCALE,
    }
  }
}

/// One block of calibration commands for a single (phmin, phmax) point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCard {
  pub index: u64,
  pub phmin: i64,
  pub phmax: i64,
  pub dacs: DacSettings,
}

impl fmt::Display for TestCard {
  // Multi-line block without a trailing newline.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "#Index: {}", self.index)?;
    writeln!(f, "setdac phoffset {}", self.dacs.phoffset)?;
    writeln!(f, "setdac phscale  {}", self.dacs.phscale)?;
    writeln!(f, "Ph:optimize phmin={}:phmax={}", self.phmin, self.phmax)?;
    write!(f, "GainPedestal dumphists=1")
  }
}

/// Yields cards row-major over the sweep, phmin outer and phmax inner,
/// with indices counting up from 1.
pub fn cards(sweep: Sweep, dacs: DacSettings) -> impl Iterator<Item = TestCard> {
  sweep
    .phmin
    .values()
    .flat_map(move |phmin| sweep.phmax.values().map(move |phmax| (phmin, phmax)))
    .zip(1u64..)
    .map(move |((phmin, phmax), index)| TestCard {
      index,
      phmin,
      phmax,
      dacs,
    })
}

/// Writes each block followed by a newline. Returns the number of cards
/// written, not counting the quit marker.
pub fn write_cards<W: Write>(out: &mut W, sweep: Sweep, dacs: DacSettings) -> Result<u64, PhtestError> {
  info!(
    "Generating {} cards: phmin {}..={}, phmax {}..={}",
    sweep.phmin.count().saturating_mul(sweep.phmax.count()),
    sweep.phmin.low,
    sweep.phmin.high,
    sweep.phmax.low,
    sweep.phmax.high
  );

  let mut written = 0;
  for card in cards(sweep, dacs) {
    trace!("Card {}: phmin={} phmax={}", card.index, card.phmin, card.phmax);
    writeln!(out, "{}", card)?;
    written += 1;
  }
  writeln!(out, "{}", QUIT_MARKER)?;
  out.flush()?;

  info!("Wrote {} cards", written);
  Ok(written)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::range::Range;
  use pretty_assertions::assert_eq;

  fn sweep(phmin: (i64, i64), phmax: (i64, i64)) -> Sweep {
    Sweep {
      phmin: Range::new(phmin.0, phmin.1),
      phmax: Range::new(phmax.0, phmax.1),
    }
  }

  fn render(sweep: Sweep, dacs: DacSettings) -> String {
    let mut out = Vec::new();
    write_cards(&mut out, sweep, dacs).unwrap();
    String::from_utf8(out).unwrap()
  }

  #[test]
  fn card_layout() {
    let card = TestCard {
      index: 7,
      phmin: 2,
      phmax: 250,
      dacs: DacSettings::default(),
    };
    assert_eq!(
      card.to_string(),
      "#Index: 7\n\
       setdac phoffset 185\n\
       setdac phscale  65\n\
       Ph:optimize phmin=2:phmax=250\n\
       GainPedestal dumphists=1"
    );
  }

  #[test]
  fn two_by_two_sweep() {
    let pairs: Vec<_> = cards(sweep((2, 3), (5, 6)), DacSettings::default())
      .map(|c| (c.index, c.phmin, c.phmax))
      .collect();
    assert_eq!(pairs, vec![(1, 2, 5), (2, 2, 6), (3, 3, 5), (4, 3, 6)]);
  }

  #[test]
  fn block_count_matches_product() {
    let out = render(sweep((2, 10), (247, 255)), DacSettings::default());
    assert_eq!(out.matches("#Index: ").count(), 9 * 9);
    assert!(out.contains("#Index: 81\nsetdac phoffset 185\nsetdac phscale  65\nPh:optimize phmin=10:phmax=255\n"));
    assert!(!out.contains("#Index: 82\n"));
    assert!(out.ends_with("GainPedestal dumphists=1\nq\n"));
  }

  #[test]
  fn single_point_output() {
    assert_eq!(
      render(sweep((1, 1), (1, 1)), DacSettings::default()),
      "#Index: 1\n\
       setdac phoffset 185\n\
       setdac phscale  65\n\
       Ph:optimize phmin=1:phmax=1\n\
       GainPedestal dumphists=1\n\
       q\n"
    );
  }

  #[test]
  fn inverted_range_writes_only_quit() {
    assert_eq!(render(sweep((5, 4), (1, 3)), DacSettings::default()), "q\n");
    assert_eq!(render(sweep((1, 3), (9, 0)), DacSettings::default()), "q\n");
  }

  #[test]
  fn write_reports_card_count() {
    let mut out = Vec::new();
    let written = write_cards(&mut out, sweep((0, 2), (0, 3)), DacSettings::default()).unwrap();
    assert_eq!(written, 12);
  }

  #[test]
  fn dac_overrides_change_only_setdac_lines() {
    let dacs = DacSettings {
      phoffset: 200,
      phscale: 70,
    };
    assert_eq!(
      render(sweep((3, 3), (4, 4)), dacs),
      "#Index: 1\n\
       setdac phoffset 200\n\
       setdac phscale  70\n\
       Ph:optimize phmin=3:phmax=4\n\
       GainPedestal dumphists=1\n\
       q\n"
    );
  }

  #[test]
  fn negative_values_render_with_sign() {
    let out = render(sweep((-1, -1), (0, 0)), DacSettings::default());
    assert!(out.contains("Ph:optimize phmin=-1:phmax=0\n"));
  }
}
