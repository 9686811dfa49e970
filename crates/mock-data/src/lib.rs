//! Seed documents for the resource desk demo.
//!
//! This crate owns the static bootstrap data the backend loads at start-up:
//! the user directory, the resource catalogue, and the current assignments.
//! It is deliberately independent of backend domain types; the backend maps
//! the validated records into its own types at the point of use.
//!
//! # Overview
//!
//! - [`SeedDocument::from_json`] and [`SeedDocument::from_path`] parse and
//!   validate a seed document.
//! - [`builtin_seed`] returns the demo data set shipped with the crate.
//!
//! # Example
//!
//! ```
//! use mock_data::builtin_seed;
//!
//! let seed = builtin_seed().expect("built-in seed is valid");
//! assert_eq!(seed.users().len(), 3);
//! assert_eq!(seed.resources().len(), 5);
//! assert_eq!(seed.assignments().len(), 3);
//! ```

mod document;
mod error;
mod records;
mod validation;

pub use document::{BUILTIN_SEED_JSON, SUPPORTED_VERSION, SeedDocument, builtin_seed};
pub use error::SeedError;
pub use records::{SeedAssignment, SeedResource, SeedResourceStatus, SeedRole, SeedUser};
pub use validation::is_valid_email;
