//! Error types for `gather-steam`.

use thiserror::Error;

/// Why a fetch run aborted. Any variant discards all work accumulated for
/// the run; there is no partial output.
#[derive(Debug, Error)]
pub enum FetchError {
  /// Network or connection failure during any request.
  #[error("transport failure: {0}")]
  Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// Response body was not well-formed for the expected schema.
  #[error("malformed response: {0}")]
  Decode(String),

  /// The provider responded, but reported `success: false`.
  #[error("steam rejected the request: {0}")]
  Rejected(String),

  /// The provider reported zero reviews on the very first page. A normal
  /// terminal condition for an app with no reviews, surfaced distinctly
  /// from mid-run exhaustion (which is a normal stop, not an error).
  #[error("app has no reviews")]
  NoReviews,
}

impl FetchError {
  pub fn transport(
    err: impl std::error::Error + Send + Sync + 'static,
  ) -> Self {
    Self::Transport(Box::new(err))
  }

  pub fn decode(context: impl Into<String>) -> Self {
    Self::Decode(context.into())
  }

  pub fn rejected(what: impl Into<String>) -> Self {
    Self::Rejected(what.into())
  }
}

pub type Result<T, E = FetchError> = std::result::Result<T, E>;
