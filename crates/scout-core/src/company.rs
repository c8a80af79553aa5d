//! Company — a client organization and the jobs it owns.

use serde::Serialize;

use crate::{
  collection::{Unique, UniqueList},
  error::{EntityKind, Error, Result},
  fields::{Address, BillingDate, Name, Phone, normalize},
  job::Job,
};

/// A client company. Owns its job listings outright: a job exists inside
/// exactly one company, and deleting the company deletes its jobs.
///
/// The job set is only ever replaced wholesale ([`Company::with_jobs`]);
/// there is no in-place job edit on a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Company {
  name:         Name,
  address:      Address,
  billing_date: BillingDate,
  phone:        Phone,
  jobs:         UniqueList<Job>,
}

impl Company {
  /// A fresh company with no job listings.
  pub fn new(
    name: Name,
    address: Address,
    billing_date: BillingDate,
    phone: Phone,
  ) -> Self {
    Self {
      name,
      address,
      billing_date,
      phone,
      jobs: UniqueList::new(),
    }
  }

  pub fn name(&self) -> &Name { &self.name }

  pub fn address(&self) -> &Address { &self.address }

  pub fn billing_date(&self) -> &BillingDate { &self.billing_date }

  pub fn phone(&self) -> &Phone { &self.phone }

  pub fn jobs(&self) -> &UniqueList<Job> { &self.jobs }

  /// A copy of this company with its job set replaced wholesale. Fails if
  /// `jobs` contains pairwise duplicates, or if any job names a company
  /// other than this one as its owner.
  pub fn with_jobs(mut self, jobs: Vec<Job>) -> Result<Self> {
    for job in &jobs {
      if normalize(job.company().as_str()) != normalize(self.name.as_str()) {
        return Err(Error::DanglingReference {
          kind:  EntityKind::Company,
          ident: job.company().to_string(),
        });
      }
    }
    self.jobs.set_all(jobs)?;
    Ok(self)
  }

  /// Domain sameness: the normalized name is the whole identity.
  pub fn is_same_company(&self, other: &Company) -> bool {
    normalize(self.name.as_str()) == normalize(other.name.as_str())
  }

  /// Case-insensitive free-text filter over the displayed fields.
  pub fn matches_keyword(&self, keyword: &str) -> bool {
    let needle = keyword.to_lowercase();
    [
      self.name.as_str(),
      self.address.as_str(),
      self.phone.as_str(),
    ]
    .iter()
    .any(|text| text.to_lowercase().contains(&needle))
  }
}

impl Unique for Company {
  fn is_same(&self, other: &Self) -> bool { self.is_same_company(other) }

  fn kind() -> EntityKind { EntityKind::Company }
}
