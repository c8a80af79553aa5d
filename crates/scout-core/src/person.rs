//! Person — a candidate contact and its identifier tuple.

use std::fmt;

use serde::Serialize;

use crate::{
  collection::Unique,
  error::EntityKind,
  fields::{Email, Name, Phone, Role, Skill, normalize},
  job::JobRef,
};

// ─── Identifier ──────────────────────────────────────────────────────────────

/// Stable, serializable stand-in for a stored [`Person`]: `[name, phone]`.
///
/// Always an owned pair of strings, never a live reference, so the object
/// graph stays acyclic and the tuple survives the data file unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonRef {
  pub name:  String,
  pub phone: String,
}

impl PersonRef {
  pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
    Self {
      name:  name.into(),
      phone: phone.into(),
    }
  }

  /// True when both tuples point at the same person: normalized name,
  /// exact phone.
  pub fn same_target(&self, other: &PersonRef) -> bool {
    normalize(&self.name) == normalize(&other.name) && self.phone == other.phone
  }
}

impl fmt::Display for PersonRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}, {}", self.name, self.phone)
  }
}

// ─── Person ──────────────────────────────────────────────────────────────────

/// A candidate in the roster.
///
/// Values are immutable: the mutation helpers return a new `Person` and the
/// roster swaps it in for the old one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
  name:        Name,
  phone:       Phone,
  email:       Email,
  role:        Role,
  /// Held sorted and deduplicated so display and encoding are deterministic.
  skills:      Vec<Skill>,
  matched_job: Option<JobRef>,
}

impl Person {
  /// A fresh, unmatched candidate.
  pub fn new(
    name: Name,
    phone: Phone,
    email: Email,
    role: Role,
    mut skills: Vec<Skill>,
  ) -> Self {
    skills.sort();
    skills.dedup();
    Self {
      name,
      phone,
      email,
      role,
      skills,
      matched_job: None,
    }
  }

  pub fn name(&self) -> &Name { &self.name }

  pub fn phone(&self) -> &Phone { &self.phone }

  pub fn email(&self) -> &Email { &self.email }

  pub fn role(&self) -> &Role { &self.role }

  pub fn skills(&self) -> &[Skill] { &self.skills }

  /// The identifier tuple other records use to point at this person.
  pub fn identifier(&self) -> PersonRef {
    PersonRef::new(self.name.as_str(), self.phone.as_str())
  }

  /// True when `reference` points at this person.
  pub fn is_identified_by(&self, reference: &PersonRef) -> bool {
    self.identifier().same_target(reference)
  }

  pub fn matched_job(&self) -> Option<&JobRef> { self.matched_job.as_ref() }

  pub fn is_match_present(&self) -> bool { self.matched_job.is_some() }

  /// True when this person's active match points at `job`. False when
  /// unmatched.
  pub fn has_matched(&self, job: &JobRef) -> bool {
    self
      .matched_job
      .as_ref()
      .is_some_and(|stored| stored.same_target(job))
  }

  /// A copy of this person carrying a match to `job`.
  pub fn with_match(mut self, job: JobRef) -> Self {
    self.matched_job = Some(job);
    self
  }

  /// A copy of this person with any match cleared.
  pub fn without_match(mut self) -> Self {
    self.matched_job = None;
    self
  }

  /// Domain sameness: two records are the same person when either the phone
  /// or the email matches. Weaker than [`PartialEq`], which compares every
  /// field.
  pub fn is_same_person(&self, other: &Person) -> bool {
    self.phone == other.phone
      || normalize(self.email.as_str()) == normalize(other.email.as_str())
  }

  /// Case-insensitive free-text filter over the displayed fields.
  pub fn matches_keyword(&self, keyword: &str) -> bool {
    let needle = keyword.to_lowercase();
    [
      self.name.as_str(),
      self.phone.as_str(),
      self.email.as_str(),
      self.role.as_str(),
    ]
    .iter()
    .any(|text| text.to_lowercase().contains(&needle))
      || self
        .skills
        .iter()
        .any(|skill| skill.as_str().to_lowercase().contains(&needle))
  }
}

impl Unique for Person {
  fn is_same(&self, other: &Self) -> bool { self.is_same_person(other) }

  fn kind() -> EntityKind { EntityKind::Person }
}
