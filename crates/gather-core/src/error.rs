//! Error types for `gather-core`.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid date range: earliest bound {earliest} is after latest bound {latest}")]
  InvalidDateRange {
    earliest: NaiveDate,
    latest:   NaiveDate,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
