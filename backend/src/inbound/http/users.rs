//! User directory handlers.
//!
//! ```text
//! GET /api/v1/users
//! GET /api/v1/users/{id}/resources
//! ```

use actix_web::{get, web};
use serde_json::json;

use crate::domain::{Error, Resource, UserId, UserOverview};
use crate::inbound::http::ApiResult;
use crate::inbound::http::guard::{AdminUser, CurrentUser};
use crate::inbound::http::state::HttpState;

/// List every user with the resources they hold.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Users with their resources", body = [UserOverview]),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Admin only", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    _admin: AdminUser,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<UserOverview>>> {
    let overview = state.read(|store| store.user_overview())?;
    Ok(web::Json(overview))
}

/// Resources assigned to a user.
///
/// Employees may only ask about themselves; admins may ask about anyone.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/resources",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Resources held by the user", body = [Resource]),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Another user's resources", body = Error),
        (status = 404, description = "Unknown user", body = Error)
    ),
    tags = ["users"],
    operation_id = "userResources"
)]
#[get("/users/{id}/resources")]
pub async fn user_resources(
    current: CurrentUser,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Resource>>> {
    let CurrentUser(viewer) = current;
    let user_id = UserId::new(path.into_inner()).map_err(|err| {
        Error::invalid_request(format!("user id is invalid: {err}"))
            .with_details(json!({ "field": "id", "code": "invalid_id" }))
    })?;
    if !viewer.is_admin() && viewer.id() != &user_id {
        return Err(Error::forbidden("employees may only list their own resources")
            .with_details(json!({ "userId": user_id.as_str() })));
    }
    state.read(|store| {
        if store.user(&user_id).is_none() {
            return Err(Error::not_found(format!("user {user_id} not found"))
                .with_details(json!({ "userId": user_id.as_str() })));
        }
        Ok(web::Json(store.user_resources(&user_id)))
    })?
}
