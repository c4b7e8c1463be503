//! Inclusive date-range filtering over canonical reviews.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// An inclusive calendar-date window, `earliest <= latest`.
///
/// Callers pass `Option<DateRange>`; `None` means no filtering at all.
/// Whether the bounds are in the future is the caller's concern — this type
/// only enforces their ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
  pub earliest: NaiveDate,
  pub latest:   NaiveDate,
}

impl DateRange {
  pub fn new(earliest: NaiveDate, latest: NaiveDate) -> Result<Self> {
    if earliest > latest {
      return Err(Error::InvalidDateRange { earliest, latest });
    }
    Ok(Self { earliest, latest })
  }

  /// `true` iff `date` falls inside the window, both ends inclusive.
  pub fn contains(&self, date: NaiveDate) -> bool {
    self.earliest <= date && date <= self.latest
  }
}

/// Range predicate with the pass-everything `None` case folded in.
pub fn in_range(bounds: Option<&DateRange>, date: NaiveDate) -> bool {
  bounds.is_none_or(|range| range.contains(date))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn no_bounds_passes_everything() {
    assert!(in_range(None, date(1970, 1, 1)));
    assert!(in_range(None, date(2099, 12, 31)));
  }

  #[test]
  fn keeps_inside_and_drops_outside() {
    let range = DateRange::new(date(2023, 3, 10), date(2023, 3, 20)).unwrap();

    assert!(range.contains(date(2023, 3, 15)));
    assert!(!range.contains(date(2023, 1, 1)));
    assert!(!range.contains(date(2023, 12, 1)));
  }

  #[test]
  fn bounds_are_inclusive() {
    let range = DateRange::new(date(2023, 3, 10), date(2023, 3, 20)).unwrap();

    assert!(range.contains(date(2023, 3, 10)));
    assert!(range.contains(date(2023, 3, 20)));
  }

  #[test]
  fn single_day_range_is_valid() {
    let range = DateRange::new(date(2023, 3, 10), date(2023, 3, 10)).unwrap();
    assert!(range.contains(date(2023, 3, 10)));
    assert!(!range.contains(date(2023, 3, 11)));
  }

  #[test]
  fn reversed_bounds_are_rejected() {
    let result = DateRange::new(date(2023, 3, 20), date(2023, 3, 10));
    assert!(matches!(result, Err(Error::InvalidDateRange { .. })));
  }
}
