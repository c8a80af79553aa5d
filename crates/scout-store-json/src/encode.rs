//! Raw record layer between a [`Roster`] and its JSON document.
//!
//! The document is flat and acyclic: companies embed their owned jobs (that
//! ownership is a tree), while Job↔Person links are flat two-string
//! identifier arrays, absent when unmatched. Scalars are carried as plain
//! strings so decoding can validate each one independently and encoding
//! reproduces them verbatim.

use scout_core::{
  company::Company, job::Job, person::Person, roster::Roster,
};
use serde::{Deserialize, Serialize};

// ─── Raw records ─────────────────────────────────────────────────────────────

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct SavedRoster {
  #[serde(default)]
  pub companies: Vec<SavedCompany>,
  #[serde(default)]
  pub persons:   Vec<SavedPerson>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SavedCompany {
  pub name:         Option<String>,
  pub address:      Option<String>,
  pub billing_date: Option<String>,
  pub phone:        Option<String>,
  #[serde(default)]
  pub jobs:         Vec<SavedJob>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SavedJob {
  pub name:         Option<String>,
  pub salary:       Option<String>,
  pub description:  Option<String>,
  #[serde(default)]
  pub requirements: Vec<String>,
  /// `[person-name, phone]`, absent when the job is unmatched. Never an
  /// embedded person record.
  #[serde(
    rename = "match",
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub matched:      Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SavedPerson {
  pub name:   Option<String>,
  pub phone:  Option<String>,
  pub email:  Option<String>,
  pub role:   Option<String>,
  #[serde(default)]
  pub skills: Vec<String>,
  /// `[company, job-name]`, absent when the candidate is unmatched. Never
  /// an embedded job record.
  #[serde(
    rename = "match",
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub matched: Option<Vec<String>>,
}

// ─── Roster → records ────────────────────────────────────────────────────────

pub(crate) fn saved_roster(roster: &Roster) -> SavedRoster {
  SavedRoster {
    companies: roster.companies().iter().map(saved_company).collect(),
    persons:   roster.persons().iter().map(saved_person).collect(),
  }
}

fn saved_company(company: &Company) -> SavedCompany {
  SavedCompany {
    name:         Some(company.name().to_string()),
    address:      Some(company.address().to_string()),
    billing_date: Some(company.billing_date().to_string()),
    phone:        Some(company.phone().to_string()),
    jobs:         company.jobs().iter().map(saved_job).collect(),
  }
}

fn saved_job(job: &Job) -> SavedJob {
  SavedJob {
    name:         Some(job.name().to_string()),
    salary:       Some(job.salary().to_string()),
    description:  Some(job.description().to_string()),
    // Requirements are kept canonically sorted by the entity itself.
    requirements: job
      .requirements()
      .iter()
      .map(|r| r.to_string())
      .collect(),
    matched:      job
      .matched_persons()
      .first()
      .map(|r| vec![r.name.clone(), r.phone.clone()]),
  }
}

fn saved_person(person: &Person) -> SavedPerson {
  SavedPerson {
    name:    Some(person.name().to_string()),
    phone:   Some(person.phone().to_string()),
    email:   Some(person.email().to_string()),
    role:    Some(person.role().to_string()),
    skills:  person.skills().iter().map(|s| s.to_string()).collect(),
    matched: person
      .matched_job()
      .map(|r| vec![r.company.clone(), r.name.clone()]),
  }
}
