//! `scoopstock-catalog` — immutable shop configuration.
//!
//! The catalog is built once at startup and passed explicitly into the
//! store and session components; nothing in here is mutable at runtime.

pub mod category;
pub mod pail;

pub use category::{Catalog, CategorySpec, InputMode};
pub use pail::PailLevel;
