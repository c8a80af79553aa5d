//! Flat-file JSON persistence for a scout [`Roster`].
//!
//! One document holds the whole store: companies with their owned jobs
//! nested inside them, plus a flat candidate list. Cross-entity links are
//! identifier tuples (flat string arrays), so the document is acyclic and
//! every reference is re-resolved against the fully-loaded store on the way
//! back in. Pure synchronous I/O; no database.
//!
//! # Quick start
//!
//! ```no_run
//! use scout_core::sample::sample_roster;
//!
//! let roster = sample_roster().unwrap();
//! scout_store_json::save(&roster, "roster.json").unwrap();
//! let reloaded = scout_store_json::load("roster.json").unwrap();
//! assert_eq!(roster, reloaded);
//! ```

mod decode;
mod encode;
pub mod error;

use std::{
  io::Write as _,
  path::{Path, PathBuf},
};

pub use error::{Error, Result};
use scout_core::Roster;
use tempfile::NamedTempFile;

/// Serialize `roster` as the pretty-printed roster document.
pub fn to_json_string(roster: &Roster) -> Result<String> {
  let mut json = serde_json::to_string_pretty(&encode::saved_roster(roster))?;
  json.push('\n');
  Ok(json)
}

/// Parse, validate, and re-link a roster from a JSON document.
///
/// Fails without producing a roster on the first missing field, malformed
/// scalar, duplicate entity, dangling identifier, or one-sided link.
pub fn from_json_str(input: &str) -> Result<Roster> {
  let saved: encode::SavedRoster = serde_json::from_str(input)?;
  decode::roster_from_saved(saved)
}

/// Load the roster stored at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Roster> {
  let raw = std::fs::read_to_string(path)?;
  from_json_str(&raw)
}

/// Save `roster` to `path` atomically.
///
/// The document is written to a temporary file in the destination directory
/// and then renamed over the target, so a crash mid-write never leaves a
/// torn file as the active persisted state. Parent directories are created
/// as needed.
pub fn save(roster: &Roster, path: impl AsRef<Path>) -> Result<()> {
  let path = path.as_ref();
  let json = to_json_string(roster)?;

  let dir = match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
    _ => PathBuf::from("."),
  };
  std::fs::create_dir_all(&dir)?;

  let mut tmp = NamedTempFile::new_in(&dir)?;
  tmp.write_all(json.as_bytes())?;
  tmp.as_file().sync_all()?;
  tmp.persist(path).map_err(|persist| persist.error)?;
  Ok(())
}
