//! Core domain types for the scout recruiting roster.
//!
//! This crate is the entity-consistency engine: validated field types,
//! duplicate-rejecting collections, the Job↔Person match protocol, and the
//! [`Roster`] aggregate every other crate works through. It performs no I/O;
//! the persistence codec lives in `scout-store-json` and the command front
//! end in `scout-cli`.
//!
//! Two equality notions run through the whole model and are kept as separate
//! named operations:
//!
//! - *structural equality* (`PartialEq`) — every field, compared exactly;
//! - *domain sameness* (`is_same_company` / `is_same_job` /
//!   `is_same_person`) — only the identity fields, normalized, used to
//!   detect duplicate real-world entities.
//!
//! Relationships between jobs and candidates are identifier tuples
//! ([`job::JobRef`], [`person::PersonRef`]), never live references, which
//! keeps the object graph acyclic for serialization.

pub mod collection;
pub mod company;
pub mod error;
pub mod fields;
pub mod job;
pub mod person;
pub mod roster;
pub mod sample;

pub use error::{EntityKind, Error, Result};
pub use roster::Roster;
