//! OpenAPI documentation.
//!
//! [`ApiDoc`] registers every REST endpoint and the schemas they exchange.
//! Swagger UI serves it in debug builds and `openapi-dump` prints it.

use utoipa::OpenApi;

use crate::domain::{
    Assignment, DashboardSummary, Error, ErrorCode, Notification, Resource, ResourceDetails,
    ResourceStatus, Severity, User, UserOverview, UserRole,
};
use crate::inbound::http::pages::PageAccessResponse;
use crate::inbound::http::resources::{
    AssigneeResponse, AssignmentBody, NewResourceBody, ResourcePatchBody,
};
use crate::inbound::http::session::{LoginBody, SessionResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Resource desk API",
        description = "Login, resource catalogue and assignment management for a small team."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::session::login,
        crate::inbound::http::session::logout,
        crate::inbound::http::session::current_user,
        crate::inbound::http::resources::list_resources,
        crate::inbound::http::resources::create_resource,
        crate::inbound::http::resources::update_resource,
        crate::inbound::http::resources::delete_resource,
        crate::inbound::http::resources::assign_resource,
        crate::inbound::http::resources::unassign_resource,
        crate::inbound::http::resources::resource_assignee,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::user_resources,
        crate::inbound::http::dashboard::dashboard,
        crate::inbound::http::dashboard::assignment_overview,
        crate::inbound::http::pages::page_access,
        crate::inbound::http::notifications::recent_notifications,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        User,
        UserRole,
        Resource,
        ResourceStatus,
        Assignment,
        Notification,
        Severity,
        DashboardSummary,
        UserOverview,
        ResourceDetails,
        LoginBody,
        SessionResponse,
        NewResourceBody,
        ResourcePatchBody,
        AssignmentBody,
        AssigneeResponse,
        PageAccessResponse,
    )),
    tags(
        (name = "session", description = "Login and logout"),
        (name = "resources", description = "Resource catalogue and assignments"),
        (name = "users", description = "User directory"),
        (name = "dashboard", description = "Summary views"),
        (name = "pages", description = "Navigation access checks"),
        (name = "notifications", description = "Recent notifications"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
