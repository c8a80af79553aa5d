//! Error types for the scout-store-json codec.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A domain rule failed while rebuilding the roster: a scalar failed its
  /// format predicate, a required field was absent, an entity was
  /// duplicated, or a link was dangling or one-sided.
  #[error(transparent)]
  Domain(#[from] scout_core::Error),

  /// The file is not a well-formed roster document. Covers truncated files
  /// left by an interrupted write.
  #[error("malformed roster file: {0}")]
  Json(#[from] serde_json::Error),

  #[error("roster file i/o: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
