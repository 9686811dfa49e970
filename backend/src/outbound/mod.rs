//! Outbound adapters implementing the domain ports.
//!
//! - **identity**: file-backed identity slot with atomic writes
//! - **notifications**: tracing-backed notification feed
//! - **seed**: conversion of `mock-data` seed documents into store tables
//!
//! Adapters are thin translators between domain types and their backing
//! medium. They contain no business logic.

pub mod identity;
pub mod notifications;
pub mod seed;
