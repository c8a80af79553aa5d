//! Record-to-domain decoding, in two passes.
//!
//! Pass one rebuilds each entity on its own: every scalar is checked for
//! presence, then pushed through its field type's constructor, and the
//! entities are inserted through the normal [`Roster`] mutation surface so
//! duplicates fail exactly as they would at runtime. Pass two resolves every
//! match identifier against the fully-loaded store via
//! [`Roster::verify_links`]: a tuple that resolves to nothing is a dangling
//! reference, and a resolved link whose other side disagrees is an integrity
//! failure. Either way the whole load fails; a roster is never half-built.

use scout_core::{
  Roster,
  company::Company,
  error::Error as DomainError,
  fields::{
    Address, BillingDate, Description, Email, Name, Phone, Requirement, Role,
    Salary, Skill,
  },
  job::{Job, JobRef},
  person::{Person, PersonRef},
};

use crate::{
  encode::{SavedCompany, SavedJob, SavedPerson, SavedRoster},
  error::Result,
};

const MATCH_CONSTRAINT: &str =
  "a match identifier must hold exactly two strings";

pub(crate) fn roster_from_saved(saved: SavedRoster) -> Result<Roster> {
  let mut roster = Roster::new();
  for raw in saved.companies {
    roster.add_company(decode_company(raw)?)?;
  }
  for raw in saved.persons {
    roster.add_person(decode_person(raw)?)?;
  }
  roster.verify_links()?;
  Ok(roster)
}

// ─── Per-entity decoding ─────────────────────────────────────────────────────

fn decode_company(raw: SavedCompany) -> Result<Company> {
  let name = Name::new(require(raw.name, "company", "name")?)?;
  let address = Address::new(require(raw.address, "company", "address")?)?;
  let billing_date =
    BillingDate::new(require(raw.billing_date, "company", "billing_date")?)?;
  let phone = Phone::new(require(raw.phone, "company", "phone")?)?;

  // Embedded jobs inherit this company as their owner; the document does
  // not repeat it per job.
  let mut jobs = Vec::with_capacity(raw.jobs.len());
  for raw_job in raw.jobs {
    jobs.push(decode_job(raw_job, &name)?);
  }

  let company = Company::new(name, address, billing_date, phone);
  Ok(company.with_jobs(jobs)?)
}

fn decode_job(raw: SavedJob, owner: &Name) -> Result<Job> {
  let name = Name::new(require(raw.name, "job", "name")?)?;
  let salary = Salary::new(require(raw.salary, "job", "salary")?)?;
  let description =
    Description::new(require(raw.description, "job", "description")?)?;

  let mut requirements = Vec::with_capacity(raw.requirements.len());
  for value in raw.requirements {
    requirements.push(Requirement::new(value)?);
  }

  let matched = raw.matched.map(person_ref_from_pair).transpose()?;

  let mut job =
    Job::new(name, owner.clone(), salary, description, requirements);
  if let Some(reference) = matched {
    job = job.with_match(reference);
  }
  Ok(job)
}

fn decode_person(raw: SavedPerson) -> Result<Person> {
  let name = Name::new(require(raw.name, "person", "name")?)?;
  let phone = Phone::new(require(raw.phone, "person", "phone")?)?;
  let email = Email::new(require(raw.email, "person", "email")?)?;
  let role = Role::new(require(raw.role, "person", "role")?)?;

  let mut skills = Vec::with_capacity(raw.skills.len());
  for value in raw.skills {
    skills.push(Skill::new(value)?);
  }

  let matched = raw.matched.map(job_ref_from_pair).transpose()?;

  let mut person = Person::new(name, phone, email, role, skills);
  if let Some(reference) = matched {
    person = person.with_match(reference);
  }
  Ok(person)
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn require(
  value: Option<String>,
  entity: &'static str,
  field: &'static str,
) -> Result<String> {
  value.ok_or_else(|| DomainError::MissingField { entity, field }.into())
}

fn person_ref_from_pair(pair: Vec<String>) -> Result<PersonRef> {
  let [name, phone] = two_strings(pair)?;
  Ok(PersonRef::new(name, phone))
}

fn job_ref_from_pair(pair: Vec<String>) -> Result<JobRef> {
  let [company, name] = two_strings(pair)?;
  Ok(JobRef::new(company, name))
}

fn two_strings(pair: Vec<String>) -> Result<[String; 2]> {
  <[String; 2]>::try_from(pair).map_err(|_| {
    DomainError::ConstraintViolation {
      field:      "match",
      constraint: MATCH_CONSTRAINT,
    }
    .into()
  })
}
