// src/range.rs
use std::ops::RangeInclusive;

use log::trace;

/// Inclusive sweep bounds for one parameter. `low > high` is allowed and
/// iterates over nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
  pub low: i64,
  pub high: i64,
}

impl Range {
  pub fn new(low: i64, high: i64) -> Self {
    Range { low, high }
  }

  pub fn values(&self) -> RangeInclusive<i64> {
    self.low..=self.high
  }

  /// Number of values in the range, zero when inverted.
  pub fn count(&self) -> u128 {
    if self.low > self.high {
      0
    } else {
      (i128::from(self.high) - i128::from(self.low) + 1) as u128
    }
  }
}

/// Width in characters of the separator between the two numbers (`..` or `.-`).
const SEPARATOR_WIDTH: usize = 2;

/// Parses `<prefix>=<A>..<B>` into `(A, B)`.
///
/// `A` runs from just after the first `=` up to the first `.` in the string;
/// `B` starts two characters past that `.` and runs to the end. A missing `=`
/// or `.` is taken to sit at the end of the string. Anything that does not
/// parse as an integer becomes 0.
pub fn parse_range(arg: &str) -> Range {
  let end = arg.len();
  let eq = arg.find('=').unwrap_or(end);
  let dot = arg.find('.').unwrap_or(end);

  let first = slice(arg, (eq + 1).min(end), dot);
  let second_start = arg[dot..]
    .char_indices()
    .nth(SEPARATOR_WIDTH)
    .map_or(end, |(i, _)| dot + i);
  let second = slice(arg, second_start, end);
  trace!("Parsing '{}': first '{}', second '{}'", arg, first, second);

  Range::new(parse_int(first), parse_int(second))
}

// Reversed bounds yield an empty slice.
fn slice(s: &str, start: usize, end: usize) -> &str {
  if start > end {
    return "";
  }
  s.get(start..end).unwrap_or("")
}

fn parse_int(s: &str) -> i64 {
  s.parse().unwrap_or(0)
}
