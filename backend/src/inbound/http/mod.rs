//! HTTP inbound adapter exposing REST endpoints.

pub mod dashboard;
pub mod error;
pub mod guard;
pub mod health;
pub mod notifications;
pub mod pages;
pub mod resources;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::ApiResult;

use actix_web::web;

use self::error::{json_error_handler, query_error_handler};

/// Register the `/api/v1` scope and the payload error handlers.
///
/// Handlers expect a [`state::HttpState`] in the application data. Health
/// probes are registered separately since they depend on server lifecycle
/// state rather than the store.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(
            web::scope("/api/v1")
                .service(session::login)
                .service(session::logout)
                .service(session::current_user)
                .service(resources::list_resources)
                .service(resources::create_resource)
                .service(resources::update_resource)
                .service(resources::delete_resource)
                .service(resources::assign_resource)
                .service(resources::unassign_resource)
                .service(resources::resource_assignee)
                .service(users::list_users)
                .service(users::user_resources)
                .service(dashboard::dashboard)
                .service(dashboard::assignment_overview)
                .service(pages::page_access)
                .service(notifications::recent_notifications),
        );
}
