//! Domain primitives, the resource store, and its ports.
//!
//! Purpose: define strongly typed entities and the single in-memory store
//! that owns them. Keep types immutable outside the store and document
//! invariants and serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - User, Resource, Assignment — directory, inventory and holdings.
//! - ResourceStore — owns every table and the logged-in identity.
//! - Page, AccessLevel — page-level access rules.

pub mod access;
pub mod assignment;
pub mod auth;
pub mod error;
pub mod identifier;
pub mod notification;
pub mod ports;
pub mod resource;
pub mod store;
pub mod trace_id;
pub mod user;
pub mod views;

pub use self::access::{AccessDecision, AccessLevel, Page, UnknownPageError};
pub use self::assignment::{Assignment, AssignmentId};
pub use self::auth::{LoginRequest, LoginValidationError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::identifier::IdentifierValidationError;
pub use self::notification::{Notification, Severity};
pub use self::resource::{
    Resource, ResourceDraft, ResourceId, ResourcePatch, ResourceStatus, ResourceValidationError,
};
pub use self::store::{LOGIN_FAILED_TITLE, ResourceStore, StoreDependencies, StoreTables};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{DisplayName, Email, User, UserId, UserRole, UserValidationError};
pub use self::views::{DashboardSummary, ResourceDetails, ResourceFilter, UserOverview};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use resource_desk::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
