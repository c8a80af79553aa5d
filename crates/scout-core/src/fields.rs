//! Validated field types — the scalar layer every entity is built from.
//!
//! Each wrapper stores the accepted string verbatim (no trimming, no numeric
//! conversion) so a value survives a save/load round trip byte-for-byte.
//! Construction goes through `new`, which applies the type's format
//! predicate; the predicate itself is exposed as `is_valid` for the storage
//! layer and for tests.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Canonical form used by identity comparisons: trimmed, interior whitespace
/// runs collapsed to a single space, ASCII-lowercased. Structural equality
/// of the wrappers stays exact.
pub(crate) fn normalize(value: &str) -> String {
  value
    .split_whitespace()
    .collect::<Vec<_>>()
    .join(" ")
    .to_ascii_lowercase()
}

macro_rules! string_field {
  ($type:ident, $field:literal, $constraint:literal, $is_valid:expr) => {
    impl $type {
      pub const CONSTRAINT: &'static str = $constraint;

      pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if Self::is_valid(&value) {
          Ok(Self(value))
        } else {
          Err(Error::ConstraintViolation {
            field:      $field,
            constraint: Self::CONSTRAINT,
          })
        }
      }

      /// The format predicate behind [`Self::new`].
      pub fn is_valid(value: &str) -> bool {
        let valid: fn(&str) -> bool = $is_valid;
        valid(value)
      }

      pub fn as_str(&self) -> &str { &self.0 }
    }

    impl fmt::Display for $type {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
      }
    }
  };
}

// ─── Names and free text ─────────────────────────────────────────────────────

/// A company, job, or person name. Kept loose on purpose: job titles carry
/// commas and digits ("Software Engineer II, Payments").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Name(String);

string_field!(
  Name,
  "name",
  "names must not be blank or start with whitespace",
  |v| v.chars().next().is_some_and(|c| !c.is_whitespace())
);

/// A candidate's current or desired role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Role(String);

string_field!(
  Role,
  "role",
  "roles must not be blank or start with whitespace",
  |v| v.chars().next().is_some_and(|c| !c.is_whitespace())
);

/// A postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Address(String);

string_field!(
  Address,
  "address",
  "addresses must not be blank or start with whitespace",
  |v| v.chars().next().is_some_and(|c| !c.is_whitespace())
);

/// Free-text description of a job listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Description(String);

string_field!(Description, "description", "descriptions must not be blank", |v| {
  !v.trim().is_empty()
});

// ─── Contact details ─────────────────────────────────────────────────────────

/// A phone number. Digits only; doubles as half of a person's identifier, so
/// no formatting characters are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Phone(String);

string_field!(
  Phone,
  "phone",
  "phone numbers must contain only digits, at least 3 of them",
  |v| v.len() >= 3 && v.bytes().all(|b| b.is_ascii_digit())
);

/// An email address of the form `local@domain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Email(String);

string_field!(
  Email,
  "email",
  "emails must be of the form local@domain, with a dotted alphanumeric \
   domain whose final label has at least 2 characters",
  is_valid_email
);

fn is_valid_email(value: &str) -> bool {
  let Some((local, domain)) = value.split_once('@') else {
    return false;
  };
  if local.is_empty()
    || !local
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || "+_.-".contains(c))
  {
    return false;
  }
  let label_ok = |label: &str| {
    !label.is_empty()
      && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
      && !label.starts_with('-')
      && !label.ends_with('-')
  };
  let labels: Vec<&str> = domain.split('.').collect();
  labels.iter().all(|l| label_ok(l))
    && labels.last().is_some_and(|l| l.len() >= 2)
}

// ─── Tags ────────────────────────────────────────────────────────────────────

/// A single skill on a candidate. Alphanumeric so tags stay shell- and
/// file-format-friendly.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Skill(String);

string_field!(Skill, "skill", "skills must be alphanumeric and non-empty", |v| {
  !v.is_empty() && v.chars().all(char::is_alphanumeric)
});

/// A single requirement tag on a job listing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Requirement(String);

string_field!(
  Requirement,
  "requirement",
  "requirements must be alphanumeric and non-empty",
  |v| !v.is_empty() && v.chars().all(char::is_alphanumeric)
);

// ─── Numbers kept as text ────────────────────────────────────────────────────

/// A job's salary figure. Stored verbatim (never parsed into a number) so
/// encoding reproduces exactly what was entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Salary(String);

string_field!(
  Salary,
  "salary",
  "salaries must be a non-empty string of digits",
  |v| !v.is_empty() && v.bytes().all(|b| b.is_ascii_digit())
);

/// The day of the month a company is billed. Capped at 28 so the date exists
/// in every month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BillingDate(String);

string_field!(
  BillingDate,
  "billing date",
  "billing dates must be a day of the month from 1 to 28",
  |v| v.parse::<u8>().is_ok_and(|day| (1..=28).contains(&day))
);

// ─── Tests ───────────────────────────────────────────────────────────────────
