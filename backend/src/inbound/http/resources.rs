//! Resource API handlers.
//!
//! ```text
//! GET    /api/v1/resources?search=laptop&type=equipment&status=assigned
//! POST   /api/v1/resources {"title":"Monitor","description":"27-inch","type":"equipment"}
//! PATCH  /api/v1/resources/{id} {"title":"Spare Monitor"}
//! DELETE /api/v1/resources/{id}
//! PUT    /api/v1/resources/{id}/assignment {"userId":"2","dueDate":"2024-07-01T00:00:00Z"}
//! DELETE /api/v1/resources/{id}/assignment
//! GET    /api/v1/resources/{id}/assignee
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{
    Assignment, Error, Resource, ResourceDraft, ResourceFilter, ResourceId, ResourcePatch,
    ResourceValidationError, User, UserId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::guard::{AdminUser, CurrentUser};
use crate::inbound::http::state::HttpState;

/// Body of `POST /api/v1/resources`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewResourceBody {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Body of `PATCH /api/v1/resources/{id}`. Absent fields are left alone.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePatchBody {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Body of `PUT /api/v1/resources/{id}/assignment`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentBody {
    #[schema(example = "2")]
    pub user_id: String,
    pub due_date: Option<DateTime<Utc>>,
}

/// Holder of a resource, if any.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeResponse {
    pub assignee: Option<User>,
}

fn map_resource_validation_error(err: ResourceValidationError) -> Error {
    let code = match &err {
        ResourceValidationError::Id(_) => "invalid_id",
        _ => "empty_field",
    };
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": err.field(),
        "code": code,
    }))
}

fn parse_resource_id(raw: String) -> Result<ResourceId, Error> {
    ResourceId::new(raw).map_err(|err| map_resource_validation_error(err.into()))
}

fn resource_not_found(id: &ResourceId) -> Error {
    Error::not_found(format!("resource {id} not found"))
        .with_details(json!({ "resourceId": id.as_str() }))
}

/// List the resources visible to the logged-in user.
///
/// Admins may filter by search term, type and status. Employees only see
/// their own resources and only the search term applies.
#[utoipa::path(
    get,
    path = "/api/v1/resources",
    params(ResourceFilter),
    responses(
        (status = 200, description = "Visible resources", body = [Resource]),
        (status = 400, description = "Invalid query", body = Error),
        (status = 401, description = "Not logged in", body = Error)
    ),
    tags = ["resources"],
    operation_id = "listResources"
)]
#[get("/resources")]
pub async fn list_resources(
    _user: CurrentUser,
    state: web::Data<HttpState>,
    filter: web::Query<ResourceFilter>,
) -> ApiResult<web::Json<Vec<Resource>>> {
    let resources = state.read(|store| store.visible_resources(&filter))?;
    Ok(web::Json(resources))
}

/// Create a resource.
#[utoipa::path(
    post,
    path = "/api/v1/resources",
    request_body = NewResourceBody,
    responses(
        (status = 201, description = "Resource created", body = Resource),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Admin only", body = Error)
    ),
    tags = ["resources"],
    operation_id = "createResource"
)]
#[post("/resources")]
pub async fn create_resource(
    _admin: AdminUser,
    state: web::Data<HttpState>,
    payload: web::Json<NewResourceBody>,
) -> ApiResult<HttpResponse> {
    let NewResourceBody {
        title,
        description,
        kind,
    } = payload.into_inner();
    let draft = ResourceDraft::try_new(title, description, kind)
        .map_err(map_resource_validation_error)?;
    let created = state.write(|store| {
        let id = store.add_resource(draft);
        store.resource(&id).cloned()
    })?;
    let created = created.ok_or_else(|| Error::internal("created resource vanished"))?;
    Ok(HttpResponse::Created().json(created))
}

/// Update a resource's title, description or type.
#[utoipa::path(
    patch,
    path = "/api/v1/resources/{id}",
    params(("id" = String, Path, description = "Resource identifier")),
    request_body = ResourcePatchBody,
    responses(
        (status = 200, description = "Resource updated", body = Resource),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Admin only", body = Error),
        (status = 404, description = "Unknown resource", body = Error)
    ),
    tags = ["resources"],
    operation_id = "updateResource"
)]
#[patch("/resources/{id}")]
pub async fn update_resource(
    _admin: AdminUser,
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ResourcePatchBody>,
) -> ApiResult<web::Json<Resource>> {
    let id = parse_resource_id(path.into_inner())?;
    let ResourcePatchBody {
        title,
        description,
        kind,
    } = payload.into_inner();
    let patch =
        ResourcePatch::try_new(title, description, kind).map_err(map_resource_validation_error)?;
    let updated = state.write(|store| {
        if store.update_resource(&id, patch) {
            store.resource(&id).cloned()
        } else {
            None
        }
    })?;
    updated
        .map(web::Json)
        .ok_or_else(|| resource_not_found(&id))
}

/// Delete a resource and its assignment. Deleting twice succeeds.
#[utoipa::path(
    delete,
    path = "/api/v1/resources/{id}",
    params(("id" = String, Path, description = "Resource identifier")),
    responses(
        (status = 204, description = "Resource absent"),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Admin only", body = Error)
    ),
    tags = ["resources"],
    operation_id = "deleteResource"
)]
#[delete("/resources/{id}")]
pub async fn delete_resource(
    _admin: AdminUser,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_resource_id(path.into_inner())?;
    state.write(|store| store.delete_resource(&id))?;
    Ok(HttpResponse::NoContent().finish())
}

/// Assign a resource to a user, replacing any current holder.
#[utoipa::path(
    put,
    path = "/api/v1/resources/{id}/assignment",
    params(("id" = String, Path, description = "Resource identifier")),
    request_body = AssignmentBody,
    responses(
        (status = 200, description = "Resource assigned", body = Assignment),
        (status = 400, description = "Unknown or non-employee user", body = Error),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Admin only", body = Error),
        (status = 404, description = "Unknown resource", body = Error)
    ),
    tags = ["resources"],
    operation_id = "assignResource"
)]
#[put("/resources/{id}/assignment")]
pub async fn assign_resource(
    _admin: AdminUser,
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<AssignmentBody>,
) -> ApiResult<web::Json<Assignment>> {
    let id = parse_resource_id(path.into_inner())?;
    let AssignmentBody { user_id, due_date } = payload.into_inner();
    let user_id = UserId::new(user_id).map_err(|err| {
        Error::invalid_request(format!("user id is invalid: {err}"))
            .with_details(json!({ "field": "userId", "code": "invalid_id" }))
    })?;
    state.write(|store| {
        if store.resource(&id).is_none() {
            return Err(resource_not_found(&id));
        }
        match store.user(&user_id) {
            None => {
                return Err(Error::invalid_request(format!("user {user_id} not found"))
                    .with_details(json!({ "field": "userId", "code": "unknown_user" })));
            }
            Some(user) if user.is_admin() => {
                return Err(Error::invalid_request(format!(
                    "user {user_id} is not an employee"
                ))
                .with_details(json!({ "field": "userId", "code": "not_employee" })));
            }
            Some(_) => {}
        }
        store.assign_resource(&id, &user_id, due_date);
        store
            .assignment_for(&id)
            .cloned()
            .map(web::Json)
            .ok_or_else(|| Error::internal("assignment vanished after assigning"))
    })?
}

/// Return a resource to the available pool.
#[utoipa::path(
    delete,
    path = "/api/v1/resources/{id}/assignment",
    params(("id" = String, Path, description = "Resource identifier")),
    responses(
        (status = 204, description = "Resource available"),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Admin only", body = Error),
        (status = 404, description = "Unknown resource", body = Error)
    ),
    tags = ["resources"],
    operation_id = "unassignResource"
)]
#[delete("/resources/{id}/assignment")]
pub async fn unassign_resource(
    _admin: AdminUser,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_resource_id(path.into_inner())?;
    if state.write(|store| store.unassign_resource(&id))? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(resource_not_found(&id))
    }
}

/// Return the user currently holding a resource.
#[utoipa::path(
    get,
    path = "/api/v1/resources/{id}/assignee",
    params(("id" = String, Path, description = "Resource identifier")),
    responses(
        (status = 200, description = "Current holder, null when available", body = AssigneeResponse),
        (status = 401, description = "Not logged in", body = Error),
        (status = 404, description = "Unknown resource", body = Error)
    ),
    tags = ["resources"],
    operation_id = "resourceAssignee"
)]
#[get("/resources/{id}/assignee")]
pub async fn resource_assignee(
    _user: CurrentUser,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<AssigneeResponse>> {
    let id = parse_resource_id(path.into_inner())?;
    state.read(|store| {
        if store.resource(&id).is_none() {
            return Err(resource_not_found(&id));
        }
        Ok(web::Json(AssigneeResponse {
            assignee: store.resource_user(&id),
        }))
    })?
}
