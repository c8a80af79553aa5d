//! Error types for `scout-core`.

use thiserror::Error;

/// The three entity families a roster stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
  Company,
  Job,
  Person,
}

impl std::fmt::Display for EntityKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(match self {
      Self::Company => "company",
      Self::Job => "job",
      Self::Person => "person",
    })
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  /// A scalar value failed its field's format predicate.
  #[error("invalid {field}: {constraint}")]
  ConstraintViolation {
    field:      &'static str,
    constraint: &'static str,
  },

  /// A required field was absent from a persisted record.
  #[error("{entity} record is missing its {field} field")]
  MissingField {
    entity: &'static str,
    field:  &'static str,
  },

  /// An equivalent entity (under domain sameness, not full equality) is
  /// already stored.
  #[error("duplicate {0}: an equivalent entry is already stored")]
  DuplicateEntity(EntityKind),

  /// A match was requested on a side that already carries an active match.
  #[error("{0} already has an active match")]
  AlreadyMatched(EntityKind),

  /// An unmatch was requested on a side with no active match.
  #[error("{0} has no active match")]
  NotMatched(EntityKind),

  /// An identifier tuple resolved to nothing in the store.
  #[error("{kind} identifier [{ident}] does not resolve to a stored entity")]
  DanglingReference { kind: EntityKind, ident: String },

  /// The two sides of a Job↔Person link disagree with each other.
  #[error("one-sided match between job [{job}] and person [{person}]")]
  RelationshipIntegrity { job: String, person: String },

  /// A positional lookup was out of bounds. Distinct from
  /// [`Error::DanglingReference`], which is an identity lookup that failed.
  #[error("index {index} is out of range for {len} {kind} entries")]
  IndexOutOfRange {
    kind:  EntityKind,
    index: usize,
    len:   usize,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
