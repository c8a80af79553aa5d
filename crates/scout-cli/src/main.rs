//! `scout` — command-line front end for the scout recruiting roster.
//!
//! Thin glue only: each subcommand parses into one core mutation or view,
//! applies it to the loaded roster, and the roster is saved after every
//! successful mutation. All invariants live in `scout-core`; this binary
//! renders results and recovers every domain error into a message.
//!
//! # Usage
//!
//! ```
//! scout seed
//! scout list jobs
//! scout add-contact --name "Alex Yeoh" --phone 87438807 \
//!   --email alexyeoh@example.com --role "Software Engineer" --skill Python
//! scout match 1 1
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use scout_core::{
  Roster,
  company::Company,
  fields::{
    Address, BillingDate, Description, Email, Name, Phone, Requirement, Role,
    Salary, Skill,
  },
  job::Job,
  person::Person,
  roster::Indexed,
  sample::sample_roster,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI grammar ──────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "scout", about = "Personal recruiting-contact manager")]
struct Cli {
  /// Path to the roster data file (default: the platform data directory).
  #[arg(long, env = "SCOUT_FILE", value_name = "FILE", global = true)]
  file: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
  #[value(alias = "companies")]
  Company,
  #[value(alias = "jobs")]
  Job,
  #[value(alias = "contacts")]
  Contact,
}

#[derive(Subcommand)]
enum Command {
  /// List stored entries of one kind.
  List {
    kind: Kind,
    /// Print as JSON instead of text.
    #[arg(long)]
    json: bool,
  },
  /// Keyword search (case-insensitive substring) over one entry kind.
  Find {
    kind:    Kind,
    keyword: String,
    #[arg(long)]
    json:    bool,
  },
  /// Add a company.
  AddCompany(AddCompanyArgs),
  /// Add a job listing under an existing company.
  AddJob(AddJobArgs),
  /// Add a candidate contact.
  AddContact(AddContactArgs),
  /// Delete the entry at INDEX, as numbered by `list`.
  Delete { kind: Kind, index: usize },
  /// Match the job at JOB with the contact at CONTACT (list numbering).
  Match { job: usize, contact: usize },
  /// Clear the match on the job or contact at INDEX.
  Unmatch { kind: Kind, index: usize },
  /// Replace the roster with the built-in sample data.
  Seed,
}

#[derive(Args)]
struct AddCompanyArgs {
  #[arg(long)]
  name: String,
  #[arg(long)]
  address: String,
  /// Day of the month the company is billed (1-28).
  #[arg(long)]
  billing_date: String,
  #[arg(long)]
  phone: String,
}

#[derive(Args)]
struct AddJobArgs {
  /// Name of an already-stored company.
  #[arg(long)]
  company: String,
  #[arg(long)]
  name: String,
  #[arg(long)]
  salary: String,
  #[arg(long)]
  description: String,
  /// Requirement tag; repeatable.
  #[arg(long = "requirement")]
  requirements: Vec<String>,
}

#[derive(Args)]
struct AddContactArgs {
  #[arg(long)]
  name: String,
  #[arg(long)]
  phone: String,
  #[arg(long)]
  email: String,
  #[arg(long)]
  role: String,
  /// Skill tag; repeatable.
  #[arg(long = "skill")]
  skills: Vec<String>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();
  let path = data_file_path(cli.file)?;
  let mut roster = load_or_empty(&path);

  match cli.command {
    Command::List { kind, json } => print_list(&roster, kind, None, json)?,
    Command::Find {
      kind,
      keyword,
      json,
    } => print_list(&roster, kind, Some(&keyword), json)?,

    Command::AddCompany(args) => {
      let company = Company::new(
        Name::new(args.name)?,
        Address::new(args.address)?,
        BillingDate::new(args.billing_date)?,
        Phone::new(args.phone)?,
      );
      let message = format!("Added company {}", company.name());
      roster.add_company(company)?;
      persist(&roster, &path)?;
      println!("{message}");
    }

    Command::AddJob(args) => {
      let requirements = args
        .requirements
        .into_iter()
        .map(Requirement::new)
        .collect::<scout_core::Result<Vec<_>>>()?;
      let job = Job::new(
        Name::new(args.name)?,
        Name::new(args.company)?,
        Salary::new(args.salary)?,
        Description::new(args.description)?,
        requirements,
      );
      let message = format!("Added job {}", job.identifier());
      roster.add_job(job)?;
      persist(&roster, &path)?;
      println!("{message}");
    }

    Command::AddContact(args) => {
      let skills = args
        .skills
        .into_iter()
        .map(Skill::new)
        .collect::<scout_core::Result<Vec<_>>>()?;
      let person = Person::new(
        Name::new(args.name)?,
        Phone::new(args.phone)?,
        Email::new(args.email)?,
        Role::new(args.role)?,
        skills,
      );
      let message = format!("Added contact {}", person.identifier());
      roster.add_person(person)?;
      persist(&roster, &path)?;
      println!("{message}");
    }

    Command::Delete { kind, index } => {
      let index = zero_based(index)?;
      let message = match kind {
        Kind::Company => {
          let removed: Company = roster.delete_at(index)?;
          format!("Deleted company {}", removed.name())
        }
        Kind::Job => {
          let removed: Job = roster.delete_at(index)?;
          format!("Deleted job {}", removed.identifier())
        }
        Kind::Contact => {
          let removed: Person = roster.delete_at(index)?;
          format!("Deleted contact {}", removed.identifier())
        }
      };
      persist(&roster, &path)?;
      println!("{message}");
    }

    Command::Match { job, contact } => {
      let job_ref = roster.job_at(zero_based(job)?)?.identifier();
      let person_ref = roster.person_at(zero_based(contact)?)?.identifier();
      let (new_job, new_person) =
        roster.match_job_person(&job_ref, &person_ref)?;
      persist(&roster, &path)?;
      println!(
        "Matched job {} with contact {}",
        new_job.identifier(),
        new_person.identifier()
      );
    }

    Command::Unmatch { kind, index } => {
      let index = zero_based(index)?;
      let (job, person) = match kind {
        Kind::Job => {
          let reference = roster.job_at(index)?.identifier();
          roster.unmatch_job(&reference)?
        }
        Kind::Contact => {
          let reference = roster.person_at(index)?.identifier();
          roster.unmatch_person(&reference)?
        }
        Kind::Company => anyhow::bail!("companies do not carry matches"),
      };
      persist(&roster, &path)?;
      println!(
        "Unmatched job {} and contact {}",
        job.identifier(),
        person.identifier()
      );
    }

    Command::Seed => {
      roster = sample_roster()?;
      persist(&roster, &path)?;
      println!(
        "Seeded {} companies, {} jobs, {} contacts",
        roster.companies().len(),
        roster.job_count(),
        roster.persons().len()
      );
    }
  }

  Ok(())
}

// ─── Roster file handling ─────────────────────────────────────────────────────

fn data_file_path(flag: Option<PathBuf>) -> anyhow::Result<PathBuf> {
  if let Some(path) = flag {
    return Ok(path);
  }
  let base = dirs::data_dir().context("no data directory on this platform")?;
  Ok(base.join("scout").join("roster.json"))
}

/// Missing file: a fresh empty roster. Corrupt file: report which record
/// and field failed, then start empty rather than half-populated; the next
/// successful mutation overwrites the bad file.
fn load_or_empty(path: &Path) -> Roster {
  match scout_store_json::load(path) {
    Ok(roster) => roster,
    Err(scout_store_json::Error::Io(err))
      if err.kind() == std::io::ErrorKind::NotFound =>
    {
      tracing::debug!("no roster file at {}; starting empty", path.display());
      Roster::new()
    }
    Err(err) => {
      tracing::warn!(
        "could not load {}: {err}; starting with an empty roster",
        path.display()
      );
      Roster::new()
    }
  }
}

fn persist(roster: &Roster, path: &Path) -> anyhow::Result<()> {
  scout_store_json::save(roster, path)
    .with_context(|| format!("saving roster to {}", path.display()))?;
  tracing::debug!("saved roster to {}", path.display());
  Ok(())
}

// ─── Rendering ────────────────────────────────────────────────────────────────

fn zero_based(index: usize) -> anyhow::Result<usize> {
  index
    .checked_sub(1)
    .context("indexes are 1-based, as numbered by `list`")
}

fn print_list(
  roster: &Roster,
  kind: Kind,
  keyword: Option<&str>,
  json: bool,
) -> anyhow::Result<()> {
  match kind {
    Kind::Company => {
      let items = match keyword {
        Some(k) => roster.filter_companies(k),
        None => Indexed::<Company>::list(roster),
      };
      print_entries(&items, json, "No companies.", render_company)
    }
    Kind::Job => {
      let items = match keyword {
        Some(k) => roster.filter_jobs(k),
        None => roster.jobs(),
      };
      print_entries(&items, json, "No jobs.", render_job)
    }
    Kind::Contact => {
      let items = match keyword {
        Some(k) => roster.filter_persons(k),
        None => Indexed::<Person>::list(roster),
      };
      print_entries(&items, json, "No contacts.", render_person)
    }
  }
}

fn print_entries<T: serde::Serialize>(
  items: &[&T],
  json: bool,
  empty: &str,
  render: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
  if json {
    println!("{}", serde_json::to_string_pretty(items)?);
    return Ok(());
  }
  if items.is_empty() {
    println!("{empty}");
    return Ok(());
  }
  for (i, item) in items.iter().enumerate() {
    println!("{:>3}. {}", i + 1, render(item));
  }
  Ok(())
}

fn render_company(company: &Company) -> String {
  format!(
    "{} | {} | billed on day {} | {}",
    company.name(),
    company.address(),
    company.billing_date(),
    company.phone()
  )
}

fn render_job(job: &Job) -> String {
  let tags: Vec<&str> =
    job.requirements().iter().map(|r| r.as_str()).collect();
  let status = match job.matched_persons().first() {
    Some(reference) => format!("matched with {reference}"),
    None => "open to applications".to_string(),
  };
  format!(
    "{} at {} | salary {} | requires [{}] | {}",
    job.name(),
    job.company(),
    job.salary(),
    tags.join(", "),
    status
  )
}

fn render_person(person: &Person) -> String {
  let skills: Vec<&str> =
    person.skills().iter().map(|s| s.as_str()).collect();
  let status = match person.matched_job() {
    Some(reference) => format!("matched with {reference}"),
    None => "unmatched".to_string(),
  };
  format!(
    "{} | {} | {} | {} | skills [{}] | {}",
    person.name(),
    person.phone(),
    person.email(),
    person.role(),
    skills.join(", "),
    status
  )
}
