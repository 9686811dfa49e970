//! Resource desk: an in-memory resource assignment service.
//!
//! The [`domain`] holds the state store and its rules, [`outbound`] the
//! adapters it talks to, and [`inbound`] the REST surface.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
pub mod startup;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
