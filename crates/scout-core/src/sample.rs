//! Seed data for first launch and demos.
//!
//! Built exclusively through the public [`Roster`] mutation surface, so the
//! seed can never encode a state the invariants would reject. Companies come
//! first, then the jobs that name them, then candidates, then matches.

use crate::{
  company::Company,
  error::Result,
  fields::{
    Address, BillingDate, Description, Email, Name, Phone, Requirement, Role,
    Salary, Skill,
  },
  job::{Job, JobRef},
  person::{Person, PersonRef},
  roster::Roster,
};

/// The demo roster: three companies, two listings, six candidates, two
/// active matches.
pub fn sample_roster() -> Result<Roster> {
  let mut roster = Roster::new();

  roster.add_company(company(
    "Google",
    "70 Pasir Panjang Rd, #03-71 Mapletree Business City II, Singapore 117371",
    "1",
    "65218000",
  )?)?;
  roster.add_company(company(
    "Meta",
    "9 Straits View, Marina One, Singapore 018937",
    "2",
    "12345678",
  )?)?;
  roster.add_company(company(
    "Amazon",
    "23 Church St, #10-01, Singapore 049481",
    "3",
    "67220300",
  )?)?;

  roster.add_job(job(
    "Google",
    "Software Engineer, Google Pay, Core",
    "100",
    "As a software engineer, you will work on a specific project critical to \
     Google's needs, with opportunities to switch teams and projects as you \
     and the business grow and evolve.",
    &["Go", "Kubernetes", "Docker", "5YOE"],
  )?)?;
  roster.add_job(job(
    "Meta",
    "Software Engineering Manager II, YouTube",
    "200",
    "As a Software Engineering Manager you manage your project goals, \
     contribute to product strategy and help develop your team.",
    &["Leadership", "AGILE", "SDLC", "CICD"],
  )?)?;

  let candidates: [(&str, &str, &str, &str, &[&str]); 6] = [
    ("Alex Yeoh", "87438807", "alexyeoh@example.com", "Software Engineer", &[
      "Python", "C",
    ]),
    ("Bernice Yu", "99272758", "berniceyu@example.com", "Copywriter", &[
      "wordpress", "MSword",
    ]),
    ("Charlotte Oliveiro", "93210283", "charlotte@example.com", "Teacher", &[
      "math",
    ]),
    ("David Li", "91031282", "lidavid@example.com", "Data Scientist", &[
      "R", "CUDA",
    ]),
    (
      "Irfan Ibrahim",
      "92492021",
      "irfan@example.com",
      "Machine Learning Engineer",
      &["CUDA", "Python"],
    ),
    ("Roy Balakrishnan", "92624417", "royb@example.com", "Bus driver", &[
      "DrivingLicense",
    ]),
  ];
  for (name, phone, email, role, skills) in candidates {
    roster.add_person(person(name, phone, email, role, skills)?)?;
  }

  roster.match_job_person(
    &JobRef::new("Google", "Software Engineer, Google Pay, Core"),
    &PersonRef::new("Alex Yeoh", "87438807"),
  )?;
  roster.match_job_person(
    &JobRef::new("Meta", "Software Engineering Manager II, YouTube"),
    &PersonRef::new("Charlotte Oliveiro", "93210283"),
  )?;

  Ok(roster)
}

fn company(
  name: &str,
  address: &str,
  billing_date: &str,
  phone: &str,
) -> Result<Company> {
  Ok(Company::new(
    Name::new(name)?,
    Address::new(address)?,
    BillingDate::new(billing_date)?,
    Phone::new(phone)?,
  ))
}

fn job(
  company: &str,
  name: &str,
  salary: &str,
  description: &str,
  requirements: &[&str],
) -> Result<Job> {
  let requirements = requirements
    .iter()
    .map(|r| Requirement::new(*r))
    .collect::<Result<Vec<_>>>()?;
  Ok(Job::new(
    Name::new(name)?,
    Name::new(company)?,
    Salary::new(salary)?,
    Description::new(description)?,
    requirements,
  ))
}

fn person(
  name: &str,
  phone: &str,
  email: &str,
  role: &str,
  skills: &[&str],
) -> Result<Person> {
  let skills = skills
    .iter()
    .map(|s| Skill::new(*s))
    .collect::<Result<Vec<_>>>()?;
  Ok(Person::new(
    Name::new(name)?,
    Phone::new(phone)?,
    Email::new(email)?,
    Role::new(role)?,
    skills,
  ))
}
