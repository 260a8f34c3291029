//! `scoopstock-auth` — name-to-role identity lookup.
//!
//! This crate is intentionally decoupled from UI and storage. There are no
//! passwords, sessions, or rate limits: access is a static table lookup
//! consulted once at session start.

pub mod directory;
pub mod role;

pub use directory::{LoginOutcome, UserDirectory};
pub use role::Role;
