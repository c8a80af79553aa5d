//! Roster — the aggregate store for companies, jobs, and candidates.
//!
//! This is the only type allowed to cross entity boundaries. Every
//! multi-entity update (add, delete, match, unmatch, bulk replace) runs all
//! of its fallible checks before its first write, so callers observe each
//! operation as atomic: it either fully happens or leaves the store
//! untouched.
//!
//! Job↔Person links are identifier tuples, never live references. Both ends
//! of a link are written in the same operation, and [`Roster::verify_links`]
//! re-checks the whole graph after a load.

use crate::{
  collection::UniqueList,
  company::Company,
  error::{EntityKind, Error, Result},
  fields::normalize,
  job::{Job, JobRef},
  person::{Person, PersonRef},
};

// ─── Positional capability ───────────────────────────────────────────────────

/// Positional list/delete shared by every entity family. One generic
/// contract instead of a per-kind copy of the same index arithmetic; the
/// command layer works against this for its delete-at-index family.
pub trait Indexed<E> {
  /// The entries in display order.
  fn list(&self) -> Vec<&E>;

  /// Delete and return the entry at `index` (0-based), with all
  /// relationship cleanup applied.
  fn delete_at(&mut self, index: usize) -> Result<E>;
}

// ─── Roster ──────────────────────────────────────────────────────────────────

/// The top-level object graph: companies owning jobs, and candidates
/// referencing jobs by identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
  companies: UniqueList<Company>,
  persons:   UniqueList<Person>,
}

impl Roster {
  pub fn new() -> Self { Self::default() }

  // ── Read views ────────────────────────────────────────────────────────

  pub fn companies(&self) -> &UniqueList<Company> { &self.companies }

  pub fn persons(&self) -> &UniqueList<Person> { &self.persons }

  /// All jobs in the store, companies in insertion order, each company's
  /// jobs in insertion order. A live projection over the owning companies,
  /// recomputed on every call.
  pub fn jobs(&self) -> Vec<&Job> {
    self
      .companies
      .iter()
      .flat_map(|company| company.jobs().iter())
      .collect()
  }

  pub fn job_count(&self) -> usize {
    self.companies.iter().map(|company| company.jobs().len()).sum()
  }

  pub fn company_at(&self, index: usize) -> Result<&Company> {
    self.companies.get(index)
  }

  pub fn person_at(&self, index: usize) -> Result<&Person> {
    self.persons.get(index)
  }

  /// The job at `index` of the flat projection returned by [`Roster::jobs`].
  pub fn job_at(&self, index: usize) -> Result<&Job> {
    let (ci, ji) = self.flat_job_location(index)?;
    self.companies.get(ci)?.jobs().get(ji)
  }

  pub fn find_company(&self, name: &str) -> Option<&Company> {
    let needle = normalize(name);
    self
      .companies
      .iter()
      .find(|company| normalize(company.name().as_str()) == needle)
  }

  pub fn find_job(&self, reference: &JobRef) -> Option<&Job> {
    let (ci, ji) = self.locate_job(reference)?;
    self.companies.as_slice()[ci].jobs().as_slice().get(ji)
  }

  pub fn find_person(&self, reference: &PersonRef) -> Option<&Person> {
    let pi = self.locate_person(reference)?;
    self.persons.as_slice().get(pi)
  }

  /// Companies whose displayed fields contain `keyword`, case-insensitive.
  /// Recomputed on demand; never cached across mutations.
  pub fn filter_companies(&self, keyword: &str) -> Vec<&Company> {
    self
      .companies
      .iter()
      .filter(|company| company.matches_keyword(keyword))
      .collect()
  }

  /// Jobs whose displayed fields contain `keyword`, case-insensitive.
  pub fn filter_jobs(&self, keyword: &str) -> Vec<&Job> {
    self
      .jobs()
      .into_iter()
      .filter(|job| job.matches_keyword(keyword))
      .collect()
  }

  /// Candidates whose displayed fields contain `keyword`, case-insensitive.
  pub fn filter_persons(&self, keyword: &str) -> Vec<&Person> {
    self
      .persons
      .iter()
      .filter(|person| person.matches_keyword(keyword))
      .collect()
  }

  // ── Companies ─────────────────────────────────────────────────────────

  /// Add a company. Any jobs it already carries (a decoded record) must not
  /// duplicate a job stored elsewhere.
  pub fn add_company(&mut self, company: Company) -> Result<()> {
    for job in company.jobs() {
      if self.jobs().iter().any(|stored| stored.is_same_job(job)) {
        return Err(Error::DuplicateEntity(EntityKind::Job));
      }
    }
    self.companies.add(company)
  }

  /// Delete the company at `index`, cascading to its jobs: every candidate
  /// matched to one of them has that back-reference cleared.
  pub fn delete_company_at(&mut self, index: usize) -> Result<Company> {
    let company = self.companies.get(index)?;

    let mut to_clear = Vec::new();
    for job in company.jobs() {
      for reference in job.matched_persons() {
        to_clear.push(self.locate_person_or_dangling(reference)?);
      }
    }

    let removed = self.companies.remove_at(index)?;
    for pi in to_clear {
      let cleared = self.persons.as_slice()[pi].clone().without_match();
      self.persons.swap_at(pi, cleared);
    }
    Ok(removed)
  }

  /// Replace the company set wholesale. Fails on pairwise company
  /// duplicates and on job duplicates across the incoming companies.
  pub fn set_companies(&mut self, companies: Vec<Company>) -> Result<()> {
    let all_jobs: Vec<&Job> = companies
      .iter()
      .flat_map(|company| company.jobs().iter())
      .collect();
    for (i, a) in all_jobs.iter().enumerate() {
      if all_jobs[i + 1..].iter().any(|b| a.is_same_job(b)) {
        return Err(Error::DuplicateEntity(EntityKind::Job));
      }
    }
    self.companies.set_all(companies)
  }

  // ── Jobs ──────────────────────────────────────────────────────────────

  /// Add a job under the company its `company` field names. The (company,
  /// name) identity must be unique across the whole store, not merely
  /// within the owning company.
  pub fn add_job(&mut self, job: Job) -> Result<()> {
    let Some(ci) = self.locate_company(job.company().as_str()) else {
      return Err(Error::DanglingReference {
        kind:  EntityKind::Company,
        ident: job.company().to_string(),
      });
    };
    if self.jobs().iter().any(|stored| stored.is_same_job(&job)) {
      return Err(Error::DuplicateEntity(EntityKind::Job));
    }

    let company = self.companies.as_slice()[ci].clone();
    let mut jobs: Vec<Job> = company.jobs().iter().cloned().collect();
    jobs.push(job);
    let updated = company.with_jobs(jobs)?;
    self.companies.swap_at(ci, updated);
    Ok(())
  }

  /// Delete the job at `index` of the flat projection, clearing the matched
  /// candidate's back-reference if one exists.
  pub fn delete_job_at(&mut self, index: usize) -> Result<Job> {
    let (ci, ji) = self.flat_job_location(index)?;
    let job = self.companies.as_slice()[ci].jobs().as_slice()[ji].clone();

    let mut to_clear = Vec::new();
    for reference in job.matched_persons() {
      to_clear.push(self.locate_person_or_dangling(reference)?);
    }

    let company = self.companies.as_slice()[ci].clone();
    let mut jobs: Vec<Job> = company.jobs().iter().cloned().collect();
    jobs.remove(ji);
    let updated = company.with_jobs(jobs)?;

    self.companies.swap_at(ci, updated);
    for pi in to_clear {
      let cleared = self.persons.as_slice()[pi].clone().without_match();
      self.persons.swap_at(pi, cleared);
    }
    Ok(job)
  }

  // ── Persons ───────────────────────────────────────────────────────────

  pub fn add_person(&mut self, person: Person) -> Result<()> {
    self.persons.add(person)
  }

  /// Delete the candidate at `index`, clearing the matched job's
  /// back-reference if one exists.
  pub fn delete_person_at(&mut self, index: usize) -> Result<Person> {
    let person = self.persons.get(index)?;

    let job_side = match person.matched_job() {
      Some(reference) => {
        let (ci, ji) = self.locate_job_or_dangling(reference)?;
        let job =
          self.companies.as_slice()[ci].jobs().as_slice()[ji].clone();
        Some((ci, self.company_with_job(ci, ji, job.without_match())?))
      }
      None => None,
    };

    if let Some((ci, updated)) = job_side {
      self.companies.swap_at(ci, updated);
    }
    self.persons.remove_at(index)
  }

  /// Replace the candidate set wholesale.
  pub fn set_persons(&mut self, persons: Vec<Person>) -> Result<()> {
    self.persons.set_all(persons)
  }

  // ── Match protocol ────────────────────────────────────────────────────

  /// Link a job and a candidate. Both identifiers must resolve, and both
  /// sides must be unmatched. The two new entity values are written in the
  /// same logical transaction; the returned snapshots are what the store
  /// now holds.
  pub fn match_job_person(
    &mut self,
    job_ref: &JobRef,
    person_ref: &PersonRef,
  ) -> Result<(Job, Person)> {
    let (ci, ji) = self.locate_job_or_dangling(job_ref)?;
    let pi = self.locate_person_or_dangling(person_ref)?;

    let job = &self.companies.as_slice()[ci].jobs().as_slice()[ji];
    let person = &self.persons.as_slice()[pi];
    if job.is_match_present() {
      return Err(Error::AlreadyMatched(EntityKind::Job));
    }
    if person.is_match_present() {
      return Err(Error::AlreadyMatched(EntityKind::Person));
    }

    let new_job = job.clone().with_match(person.identifier());
    let new_person = person.clone().with_match(job.identifier());
    let updated = self.company_with_job(ci, ji, new_job.clone())?;

    self.companies.swap_at(ci, updated);
    self.persons.swap_at(pi, new_person.clone());
    Ok((new_job, new_person))
  }

  /// Clear the match on the job `job_ref` points at, symmetrically clearing
  /// the candidate's back-reference.
  pub fn unmatch_job(&mut self, job_ref: &JobRef) -> Result<(Job, Person)> {
    let (ci, ji) = self.locate_job_or_dangling(job_ref)?;
    let job = self.companies.as_slice()[ci].jobs().as_slice()[ji].clone();
    let Some(person_ref) = job.matched_persons().first() else {
      return Err(Error::NotMatched(EntityKind::Job));
    };
    let pi = self.locate_person_or_dangling(person_ref)?;
    self.clear_link(ci, ji, pi)
  }

  /// Clear the match on the candidate `person_ref` points at, symmetrically
  /// clearing the job's back-reference.
  pub fn unmatch_person(
    &mut self,
    person_ref: &PersonRef,
  ) -> Result<(Job, Person)> {
    let pi = self.locate_person_or_dangling(person_ref)?;
    let Some(job_ref) = self.persons.as_slice()[pi].matched_job().cloned()
    else {
      return Err(Error::NotMatched(EntityKind::Person));
    };
    let (ci, ji) = self.locate_job_or_dangling(&job_ref)?;
    self.clear_link(ci, ji, pi)
  }

  /// Verify every Job↔Person link in both directions. Run by the storage
  /// layer after a load; a stored identifier that resolves to nothing is a
  /// dangling reference, and a resolved link whose other side disagrees is
  /// an integrity failure, never silently healed.
  pub fn verify_links(&self) -> Result<()> {
    for person in &self.persons {
      if let Some(job_ref) = person.matched_job() {
        let Some((ci, ji)) = self.locate_job(job_ref) else {
          return Err(Error::DanglingReference {
            kind:  EntityKind::Job,
            ident: job_ref.to_string(),
          });
        };
        let job = &self.companies.as_slice()[ci].jobs().as_slice()[ji];
        if !job.has_matched(&person.identifier()) {
          return Err(Error::RelationshipIntegrity {
            job:    job_ref.to_string(),
            person: person.identifier().to_string(),
          });
        }
      }
    }
    for job in self.jobs() {
      for person_ref in job.matched_persons() {
        let Some(person) =
          self.find_person(person_ref)
        else {
          return Err(Error::DanglingReference {
            kind:  EntityKind::Person,
            ident: person_ref.to_string(),
          });
        };
        if !person.has_matched(&job.identifier()) {
          return Err(Error::RelationshipIntegrity {
            job:    job.identifier().to_string(),
            person: person_ref.to_string(),
          });
        }
      }
    }
    Ok(())
  }

  // ── Internal lookups ──────────────────────────────────────────────────

  fn locate_company(&self, name: &str) -> Option<usize> {
    let needle = normalize(name);
    self
      .companies
      .position(|company| normalize(company.name().as_str()) == needle)
  }

  fn locate_job(&self, reference: &JobRef) -> Option<(usize, usize)> {
    self.companies.iter().enumerate().find_map(|(ci, company)| {
      company
        .jobs()
        .position(|job| job.is_identified_by(reference))
        .map(|ji| (ci, ji))
    })
  }

  fn locate_person(&self, reference: &PersonRef) -> Option<usize> {
    self
      .persons
      .position(|person| person.is_identified_by(reference))
  }

  fn locate_job_or_dangling(
    &self,
    reference: &JobRef,
  ) -> Result<(usize, usize)> {
    self.locate_job(reference).ok_or(Error::DanglingReference {
      kind:  EntityKind::Job,
      ident: reference.to_string(),
    })
  }

  fn locate_person_or_dangling(&self, reference: &PersonRef) -> Result<usize> {
    self
      .locate_person(reference)
      .ok_or(Error::DanglingReference {
        kind:  EntityKind::Person,
        ident: reference.to_string(),
      })
  }

  fn flat_job_location(&self, index: usize) -> Result<(usize, usize)> {
    let mut remaining = index;
    for (ci, company) in self.companies.iter().enumerate() {
      let count = company.jobs().len();
      if remaining < count {
        return Ok((ci, remaining));
      }
      remaining -= count;
    }
    Err(Error::IndexOutOfRange {
      kind: EntityKind::Job,
      index,
      len: self.job_count(),
    })
  }

  /// A copy of the company at `ci` with its job at `ji` replaced. Pure: no
  /// store state changes.
  fn company_with_job(
    &self,
    ci: usize,
    ji: usize,
    replacement: Job,
  ) -> Result<Company> {
    let company = self.companies.get(ci)?.clone();
    let mut jobs: Vec<Job> = company.jobs().iter().cloned().collect();
    jobs[ji] = replacement;
    company.with_jobs(jobs)
  }

  /// Clear both sides of the link between the job at (`ci`, `ji`) and the
  /// candidate at `pi`. All lookups already done; the two writes cannot
  /// fail halfway.
  fn clear_link(
    &mut self,
    ci: usize,
    ji: usize,
    pi: usize,
  ) -> Result<(Job, Person)> {
    let new_job =
      self.companies.as_slice()[ci].jobs().as_slice()[ji].clone().without_match();
    let new_person = self.persons.as_slice()[pi].clone().without_match();
    let updated = self.company_with_job(ci, ji, new_job.clone())?;

    self.companies.swap_at(ci, updated);
    self.persons.swap_at(pi, new_person.clone());
    Ok((new_job, new_person))
  }
}

// ─── Indexed impls ───────────────────────────────────────────────────────────

impl Indexed<Company> for Roster {
  fn list(&self) -> Vec<&Company> { self.companies.iter().collect() }

  fn delete_at(&mut self, index: usize) -> Result<Company> {
    self.delete_company_at(index)
  }
}

impl Indexed<Job> for Roster {
  fn list(&self) -> Vec<&Job> { self.jobs() }

  fn delete_at(&mut self, index: usize) -> Result<Job> {
    self.delete_job_at(index)
  }
}

impl Indexed<Person> for Roster {
  fn list(&self) -> Vec<&Person> { self.persons.iter().collect() }

  fn delete_at(&mut self, index: usize) -> Result<Person> {
    self.delete_person_at(index)
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fields::{
    Address, BillingDate, Description, Email, Name, Phone, Role, Salary,
  };

  fn company(name: &str, phone: &str) -> Company {
    Company::new(
      Name::new(name).unwrap(),
      Address::new("23 Church St, Singapore").unwrap(),
      BillingDate::new("1").unwrap(),
      Phone::new(phone).unwrap(),
    )
  }

  fn job(company: &str, name: &str) -> Job {
    Job::new(
      Name::new(name).unwrap(),
      Name::new(company).unwrap(),
      Salary::new("100").unwrap(),
      Description::new("Ship software.").unwrap(),
      vec![],
    )
  }

  fn person(name: &str, phone: &str, email: &str) -> Person {
    Person::new(
      Name::new(name).unwrap(),
      Phone::new(phone).unwrap(),
      Email::new(email).unwrap(),
      Role::new("Engineer").unwrap(),
      vec![],
    )
  }

  /// One company, one job, one unmatched candidate.
  fn small_roster() -> Roster {
    let mut roster = Roster::new();
    roster.add_company(company("Google", "65218000")).unwrap();
    roster.add_job(job("Google", "Software Engineer")).unwrap();
    roster
      .add_person(person("Alex Yeoh", "87438807", "alexyeoh@example.com"))
      .unwrap();
    roster
  }

  fn swe_ref() -> JobRef { JobRef::new("Google", "Software Engineer") }

  fn alex_ref() -> PersonRef { PersonRef::new("Alex Yeoh", "87438807") }

  // ── Add / duplicate rules ─────────────────────────────────────────────

  #[test]
  fn add_job_requires_a_stored_company() {
    let mut roster = Roster::new();
    let err = roster.add_job(job("Google", "SWE")).unwrap_err();
    assert_eq!(err, Error::DanglingReference {
      kind:  EntityKind::Company,
      ident: "Google".to_string(),
    });
  }

  #[test]
  fn job_identity_is_unique_across_the_whole_store() {
    let mut roster = small_roster();
    roster.add_company(company("Meta", "12345678")).unwrap();

    // Same name under another company is fine.
    roster.add_job(job("Meta", "Software Engineer")).unwrap();
    // Same (company, name) pair is not, regardless of case.
    let err = roster.add_job(job("google", "software engineer")).unwrap_err();
    assert_eq!(err, Error::DuplicateEntity(EntityKind::Job));
  }

  #[test]
  fn duplicate_person_by_phone_or_email_is_rejected() {
    let mut roster = small_roster();
    let err = roster
      .add_person(person("Different Name", "87438807", "other@example.com"))
      .unwrap_err();
    assert_eq!(err, Error::DuplicateEntity(EntityKind::Person));

    let err = roster
      .add_person(person("Different Name", "99999999", "alexyeoh@example.com"))
      .unwrap_err();
    assert_eq!(err, Error::DuplicateEntity(EntityKind::Person));
  }

  // ── Match protocol ────────────────────────────────────────────────────

  #[test]
  fn match_writes_both_sides() {
    let mut roster = small_roster();
    let (new_job, new_person) =
      roster.match_job_person(&swe_ref(), &alex_ref()).unwrap();

    assert!(new_job.has_matched(&alex_ref()));
    assert_eq!(new_person.matched_job(), Some(&swe_ref()));

    // The store holds the new values, and the graph is consistent.
    assert!(roster.find_job(&swe_ref()).unwrap().has_matched(&alex_ref()));
    assert!(roster.find_person(&alex_ref()).unwrap().has_matched(&swe_ref()));
    roster.verify_links().unwrap();
  }

  #[test]
  fn match_rejects_either_side_already_matched() {
    let mut roster = small_roster();
    roster
      .add_person(person("Bernice Yu", "99272758", "berniceyu@example.com"))
      .unwrap();
    roster.match_job_person(&swe_ref(), &alex_ref()).unwrap();
    let before = roster.clone();

    let bernice = PersonRef::new("Bernice Yu", "99272758");
    let err = roster.match_job_person(&swe_ref(), &bernice).unwrap_err();
    assert_eq!(err, Error::AlreadyMatched(EntityKind::Job));
    assert_eq!(roster, before);

    roster.add_company(company("Meta", "12345678")).unwrap();
    roster.add_job(job("Meta", "Designer")).unwrap();
    let designer = JobRef::new("Meta", "Designer");
    let err = roster.match_job_person(&designer, &alex_ref()).unwrap_err();
    assert_eq!(err, Error::AlreadyMatched(EntityKind::Person));
  }

  #[test]
  fn match_rejects_unresolvable_identifiers_without_side_effects() {
    let mut roster = small_roster();
    let before = roster.clone();

    let ghost_job = JobRef::new("Google", "Ghost Job");
    let err = roster.match_job_person(&ghost_job, &alex_ref()).unwrap_err();
    assert!(matches!(err, Error::DanglingReference {
      kind: EntityKind::Job,
      ..
    }));

    let ghost_person = PersonRef::new("Nobody", "00000000");
    let err = roster.match_job_person(&swe_ref(), &ghost_person).unwrap_err();
    assert!(matches!(err, Error::DanglingReference {
      kind: EntityKind::Person,
      ..
    }));

    assert_eq!(roster, before);
  }

  #[test]
  fn unmatch_clears_both_sides_from_either_end() {
    let mut roster = small_roster();
    roster.match_job_person(&swe_ref(), &alex_ref()).unwrap();

    let (job, person) = roster.unmatch_job(&swe_ref()).unwrap();
    assert!(!job.is_match_present());
    assert!(!person.is_match_present());
    assert!(!roster.find_person(&alex_ref()).unwrap().is_match_present());

    // Re-match, then unmatch from the person side.
    roster.match_job_person(&swe_ref(), &alex_ref()).unwrap();
    roster.unmatch_person(&alex_ref()).unwrap();
    assert!(!roster.find_job(&swe_ref()).unwrap().is_match_present());
    roster.verify_links().unwrap();
  }

  #[test]
  fn unmatch_without_a_match_is_an_error() {
    let mut roster = small_roster();
    assert_eq!(
      roster.unmatch_job(&swe_ref()).unwrap_err(),
      Error::NotMatched(EntityKind::Job)
    );
    assert_eq!(
      roster.unmatch_person(&alex_ref()).unwrap_err(),
      Error::NotMatched(EntityKind::Person)
    );
  }

  // ── Deletion cascades ─────────────────────────────────────────────────

  #[test]
  fn deleting_a_matched_job_clears_the_candidate() {
    let mut roster = small_roster();
    roster.match_job_person(&swe_ref(), &alex_ref()).unwrap();

    let removed = roster.delete_job_at(0).unwrap();
    assert_eq!(removed.name().as_str(), "Software Engineer");
    assert!(!roster.find_person(&alex_ref()).unwrap().is_match_present());
    assert_eq!(roster.job_count(), 0);
    roster.verify_links().unwrap();
  }

  #[test]
  fn deleting_a_matched_candidate_clears_the_job() {
    let mut roster = small_roster();
    roster.match_job_person(&swe_ref(), &alex_ref()).unwrap();

    roster.delete_person_at(0).unwrap();
    assert!(!roster.find_job(&swe_ref()).unwrap().is_match_present());
    roster.verify_links().unwrap();
  }

  #[test]
  fn deleting_a_company_cascades_through_its_jobs() {
    let mut roster = small_roster();
    roster.match_job_person(&swe_ref(), &alex_ref()).unwrap();

    let removed = roster.delete_company_at(0).unwrap();
    assert_eq!(removed.name().as_str(), "Google");
    assert_eq!(roster.job_count(), 0);
    assert!(!roster.find_person(&alex_ref()).unwrap().is_match_present());
  }

  #[test]
  fn deleting_an_unmatched_entity_touches_nothing_else() {
    let mut roster = small_roster();
    roster
      .add_person(person("Bernice Yu", "99272758", "berniceyu@example.com"))
      .unwrap();
    roster.match_job_person(&swe_ref(), &alex_ref()).unwrap();

    // Bernice is unmatched; deleting her leaves the link intact.
    roster.delete_person_at(1).unwrap();
    assert!(roster.find_job(&swe_ref()).unwrap().has_matched(&alex_ref()));
    roster.verify_links().unwrap();
  }

  // ── Bulk replace ──────────────────────────────────────────────────────

  #[test]
  fn set_persons_replaces_wholesale_or_not_at_all() {
    let mut roster = small_roster();
    roster
      .set_persons(vec![
        person("Bernice Yu", "99272758", "berniceyu@example.com"),
        person("David Li", "91031282", "lidavid@example.com"),
      ])
      .unwrap();
    assert_eq!(roster.persons().len(), 2);

    // A batch with an internal duplicate changes nothing.
    let err = roster
      .set_persons(vec![
        person("Irfan Ibrahim", "92492021", "irfan@example.com"),
        person("Also Irfan", "92492021", "irfan2@example.com"),
      ])
      .unwrap_err();
    assert_eq!(err, Error::DuplicateEntity(EntityKind::Person));
    assert_eq!(roster.persons().len(), 2);
  }

  #[test]
  fn set_companies_checks_jobs_across_the_incoming_batch() {
    let mut roster = Roster::new();

    let google = company("Google", "65218000")
      .with_jobs(vec![job("Google", "SWE")])
      .unwrap();
    let meta = company("Meta", "12345678")
      .with_jobs(vec![job("Meta", "SWE")])
      .unwrap();
    // Same job name under different companies is a distinct identity.
    roster.set_companies(vec![google.clone(), meta]).unwrap();
    assert_eq!(roster.job_count(), 2);

    // Two records of the same company both carrying the same job: the
    // store-wide job scan fires before the company duplicate check.
    let google_again = company("Google", "65218000")
      .with_jobs(vec![job("Google", "SWE")])
      .unwrap();
    let err = roster
      .set_companies(vec![google, google_again])
      .unwrap_err();
    assert_eq!(err, Error::DuplicateEntity(EntityKind::Job));
  }

  // ── Lookup by identity and by position ────────────────────────────────

  #[test]
  fn find_company_is_normalized_and_company_at_is_positional() {
    let roster = small_roster();
    assert!(roster.find_company("  google ").is_some());
    assert!(roster.find_company("Amazon").is_none());

    assert_eq!(roster.company_at(0).unwrap().name().as_str(), "Google");
    assert!(matches!(
      roster.company_at(1).unwrap_err(),
      Error::IndexOutOfRange {
        kind: EntityKind::Company,
        ..
      }
    ));
    assert_eq!(roster.person_at(0).unwrap().name().as_str(), "Alex Yeoh");
  }

  // ── Flat job projection ───────────────────────────────────────────────

  #[test]
  fn jobs_projection_spans_companies_in_order() {
    let mut roster = small_roster();
    roster.add_company(company("Meta", "12345678")).unwrap();
    roster.add_job(job("Meta", "Designer")).unwrap();
    roster.add_job(job("Google", "Site Reliability Engineer")).unwrap();

    let names: Vec<&str> =
      roster.jobs().iter().map(|j| j.name().as_str()).collect();
    assert_eq!(names, vec![
      "Software Engineer",
      "Site Reliability Engineer",
      "Designer",
    ]);

    // The flat index resolves across company boundaries.
    assert_eq!(roster.job_at(2).unwrap().name().as_str(), "Designer");
    let err = roster.job_at(3).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfRange {
      kind: EntityKind::Job,
      index: 3,
      len: 3,
    }));
  }

  // ── Views are live, not snapshots ─────────────────────────────────────

  #[test]
  fn filtered_views_reflect_later_mutations() {
    let mut roster = small_roster();
    assert_eq!(roster.filter_persons("alex").len(), 1);
    roster.delete_person_at(0).unwrap();
    assert_eq!(roster.filter_persons("alex").len(), 0);
  }

  #[test]
  fn filter_is_case_insensitive_substring() {
    let roster = small_roster();
    assert_eq!(roster.filter_companies("GOOG").len(), 1);
    assert_eq!(roster.filter_jobs("engineer").len(), 1);
    assert_eq!(roster.filter_jobs("plumber").len(), 0);
  }

  // ── Indexed capability ────────────────────────────────────────────────

  #[test]
  fn indexed_contract_spans_entity_kinds() {
    let mut roster = small_roster();

    assert_eq!(Indexed::<Company>::list(&roster).len(), 1);
    assert_eq!(Indexed::<Job>::list(&roster).len(), 1);
    assert_eq!(Indexed::<Person>::list(&roster).len(), 1);

    let _removed: Job = roster.delete_at(0).unwrap();
    assert_eq!(Indexed::<Job>::list(&roster).len(), 0);
    let err: Error = Indexed::<Job>::delete_at(&mut roster, 0).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfRange { .. }));
  }

  // ── Link verification ─────────────────────────────────────────────────

  #[test]
  fn verify_links_accepts_a_consistent_graph() {
    let mut roster = small_roster();
    roster.match_job_person(&swe_ref(), &alex_ref()).unwrap();
    roster.verify_links().unwrap();
  }

  #[test]
  fn verify_links_flags_a_dangling_person_side() {
    let mut roster = small_roster();
    let ghost = JobRef::new("Nowhere", "Ghost Job");
    roster
      .add_person(
        person("Bernice Yu", "99272758", "berniceyu@example.com")
          .with_match(ghost),
      )
      .unwrap();

    let err = roster.verify_links().unwrap_err();
    assert!(matches!(err, Error::DanglingReference {
      kind: EntityKind::Job,
      ..
    }));
  }

  #[test]
  fn verify_links_flags_a_one_sided_match() {
    let mut roster = small_roster();
    // Person claims the job, but the job was never told.
    roster
      .add_person(
        person("Bernice Yu", "99272758", "berniceyu@example.com")
          .with_match(swe_ref()),
      )
      .unwrap();

    let err = roster.verify_links().unwrap_err();
    assert!(matches!(err, Error::RelationshipIntegrity { .. }));
  }
}
