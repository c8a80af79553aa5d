//! Job — a listing owned by a company, plus its identifier tuple.

use std::fmt;

use serde::Serialize;

use crate::{
  collection::Unique,
  error::EntityKind,
  fields::{Description, Name, Requirement, Salary, normalize},
  person::PersonRef,
};

// ─── Identifier ──────────────────────────────────────────────────────────────

/// Stable, serializable stand-in for a stored [`Job`]: `[company, name]`.
///
/// The company comes first so a job name that happens to equal some company
/// name can never be misread when the tuple round-trips through the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobRef {
  pub company: String,
  pub name:    String,
}

impl JobRef {
  pub fn new(company: impl Into<String>, name: impl Into<String>) -> Self {
    Self {
      company: company.into(),
      name:    name.into(),
    }
  }

  /// True when both tuples point at the same job (normalized compare).
  pub fn same_target(&self, other: &JobRef) -> bool {
    normalize(&self.company) == normalize(&other.company)
      && normalize(&self.name) == normalize(&other.name)
  }
}

impl fmt::Display for JobRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}, {}", self.company, self.name)
  }
}

// ─── Job ─────────────────────────────────────────────────────────────────────

/// A job listing. Its identity is the (company, name) pair, unique across
/// the whole store rather than merely within the owning company.
///
/// Values are immutable: the mutation helpers return a new `Job` and the
/// roster swaps it in for the old one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Job {
  name:            Name,
  company:         Name,
  salary:          Salary,
  description:     Description,
  /// Held sorted and deduplicated so display and encoding are deterministic.
  requirements:    Vec<Requirement>,
  /// Identifier tuples of matched candidates. The match protocol keeps this
  /// at zero or one entries.
  matched_persons: Vec<PersonRef>,
}

impl Job {
  /// A fresh, unmatched listing.
  pub fn new(
    name: Name,
    company: Name,
    salary: Salary,
    description: Description,
    mut requirements: Vec<Requirement>,
  ) -> Self {
    requirements.sort();
    requirements.dedup();
    Self {
      name,
      company,
      salary,
      description,
      requirements,
      matched_persons: Vec::new(),
    }
  }

  pub fn name(&self) -> &Name { &self.name }

  pub fn company(&self) -> &Name { &self.company }

  pub fn salary(&self) -> &Salary { &self.salary }

  pub fn description(&self) -> &Description { &self.description }

  pub fn requirements(&self) -> &[Requirement] { &self.requirements }

  /// The identifier tuple other records use to point at this job.
  pub fn identifier(&self) -> JobRef {
    JobRef::new(self.company.as_str(), self.name.as_str())
  }

  /// True when `reference` points at this job.
  pub fn is_identified_by(&self, reference: &JobRef) -> bool {
    self.identifier().same_target(reference)
  }

  pub fn matched_persons(&self) -> &[PersonRef] { &self.matched_persons }

  pub fn is_match_present(&self) -> bool { !self.matched_persons.is_empty() }

  /// True when this job's active matches include `person`. False when
  /// unmatched.
  pub fn has_matched(&self, person: &PersonRef) -> bool {
    self
      .matched_persons
      .iter()
      .any(|stored| stored.same_target(person))
  }

  /// A copy of this job carrying a match to `person`.
  pub fn with_match(mut self, person: PersonRef) -> Self {
    self.matched_persons.push(person);
    self
  }

  /// A copy of this job with all matches cleared.
  pub fn without_match(mut self) -> Self {
    self.matched_persons.clear();
    self
  }

  /// Domain sameness: same normalized name and company. Salary, description,
  /// requirements, and match state do not participate.
  pub fn is_same_job(&self, other: &Job) -> bool {
    normalize(self.name.as_str()) == normalize(other.name.as_str())
      && normalize(self.company.as_str()) == normalize(other.company.as_str())
  }

  /// Case-insensitive free-text filter over the displayed fields.
  pub fn matches_keyword(&self, keyword: &str) -> bool {
    let needle = keyword.to_lowercase();
    [
      self.name.as_str(),
      self.company.as_str(),
      self.description.as_str(),
    ]
    .iter()
    .any(|text| text.to_lowercase().contains(&needle))
      || self
        .requirements
        .iter()
        .any(|req| req.as_str().to_lowercase().contains(&needle))
  }
}

impl Unique for Job {
  fn is_same(&self, other: &Self) -> bool { self.is_same_job(other) }

  fn kind() -> EntityKind { EntityKind::Job }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn job(company: &str, name: &str, salary: &str) -> Job {
    Job::new(
      Name::new(name).unwrap(),
      Name::new(company).unwrap(),
      Salary::new(salary).unwrap(),
      Description::new("Build and run production services.").unwrap(),
      vec![
        Requirement::new("Go").unwrap(),
        Requirement::new("Kubernetes").unwrap(),
      ],
    )
  }

  #[test]
  fn sameness_is_company_and_name_only() {
    let swe = job("Google", "Software Engineer", "100");
    let repriced = job("Google", "Software Engineer", "999");
    assert!(swe.is_same_job(&repriced));
    assert_ne!(swe, repriced);

    assert!(!swe.is_same_job(&job("Meta", "Software Engineer", "100")));
    assert!(!swe.is_same_job(&job("Google", "Engineering Manager", "100")));
  }

  #[test]
  fn sameness_ignores_case_and_extra_whitespace() {
    let swe = job("Google", "Software Engineer", "100");
    let shouty = job("GOOGLE", "software  engineer", "100");
    assert!(swe.is_same_job(&shouty));
  }

  #[test]
  fn identifier_is_company_then_name() {
    let swe = job("Google", "Software Engineer", "100");
    let id = swe.identifier();
    assert_eq!(id.company, "Google");
    assert_eq!(id.name, "Software Engineer");
    assert!(swe.is_identified_by(&JobRef::new("google", "software engineer")));
  }

  #[test]
  fn requirements_are_sorted_and_deduplicated() {
    let j = Job::new(
      Name::new("Software Engineer").unwrap(),
      Name::new("Google").unwrap(),
      Salary::new("100").unwrap(),
      Description::new("desc").unwrap(),
      vec![
        Requirement::new("Kubernetes").unwrap(),
        Requirement::new("Go").unwrap(),
        Requirement::new("Go").unwrap(),
      ],
    );
    let names: Vec<&str> =
      j.requirements().iter().map(|r| r.as_str()).collect();
    assert_eq!(names, vec!["Go", "Kubernetes"]);
  }

  #[test]
  fn match_state_round_trip() {
    let alex = PersonRef::new("Alex Yeoh", "87438807");
    let swe = job("Google", "Software Engineer", "100");
    assert!(!swe.is_match_present());

    let matched = swe.with_match(alex.clone());
    assert!(matched.is_match_present());
    assert!(matched.has_matched(&alex));
    assert!(matched.has_matched(&PersonRef::new("alex  yeoh", "87438807")));
    assert!(!matched.has_matched(&PersonRef::new("Alex Yeoh", "00000000")));
    assert_eq!(matched.matched_persons(), &[alex]);

    assert!(!matched.without_match().is_match_present());
  }
}
