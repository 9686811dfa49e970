//! Dashboard handlers.
//!
//! ```text
//! GET /api/v1/dashboard
//! GET /api/v1/dashboard/assignments
//! ```

use actix_web::{get, web};

use crate::domain::{DashboardSummary, Error, ResourceDetails};
use crate::inbound::http::ApiResult;
use crate::inbound::http::guard::{AdminUser, CurrentUser};
use crate::inbound::http::state::HttpState;

/// Counts and resources for the logged-in user. Totals appear for admins
/// only.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    responses(
        (status = 200, description = "Dashboard summary", body = DashboardSummary),
        (status = 401, description = "Not logged in", body = Error)
    ),
    tags = ["dashboard"],
    operation_id = "dashboard"
)]
#[get("/dashboard")]
pub async fn dashboard(
    _user: CurrentUser,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<DashboardSummary>> {
    state
        .read(|store| store.dashboard())?
        .map(web::Json)
        .ok_or_else(|| Error::unauthorized("login required"))
}

/// Every resource paired with its current assignee.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/assignments",
    responses(
        (status = 200, description = "Resources with assignees", body = [ResourceDetails]),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Admin only", body = Error)
    ),
    tags = ["dashboard"],
    operation_id = "assignmentOverview"
)]
#[get("/dashboard/assignments")]
pub async fn assignment_overview(
    _admin: AdminUser,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ResourceDetails>>> {
    let details = state.read(|store| store.resource_details())?;
    Ok(web::Json(details))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use rstest::rstest;
    use serde_json::{Value, json};

    use crate::inbound::http::configure;
    use crate::inbound::http::test_utils::demo_state;

    async fn get_as(email: &str, uri: &str) -> (StatusCode, Value) {
        let state = demo_state();
        assert!(state.write(|store| store.login(email)).expect("store lock"));
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;
        let req = actix_test::TestRequest::get().uri(uri).to_request();
        let res = actix_test::call_service(&app, req).await;
        let status = res.status();
        let body = actix_test::read_body(res).await;
        (status, serde_json::from_slice(&body).expect("JSON body"))
    }

    #[rstest]
    #[case("admin@example.com", json!(0), json!(5), json!(3), vec!["1", "2", "3", "4", "5"])]
    #[case("john@example.com", json!(2), Value::Null, Value::Null, vec!["1", "4"])]
    #[case("jane@example.com", json!(1), Value::Null, Value::Null, vec!["3"])]
    #[actix_web::test]
    async fn summary_depends_on_role(
        #[case] email: &str,
        #[case] mine: Value,
        #[case] total: Value,
        #[case] assigned: Value,
        #[case] listed: Vec<&str>,
    ) {
        let (status, body) = get_as(email, "/api/v1/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["myResources"], mine);
        assert_eq!(body["totalResources"], total);
        assert_eq!(body["totalAssigned"], assigned);
        let ids: Vec<&str> = body["resources"]
            .as_array()
            .expect("resources array")
            .iter()
            .filter_map(|resource| resource["id"].as_str())
            .collect();
        assert_eq!(ids, listed);
    }

    #[actix_web::test]
    async fn assignment_overview_names_holders() {
        let (status, body) = get_as("admin@example.com", "/api/v1/dashboard/assignments").await;
        assert_eq!(status, StatusCode::OK);
        let rows = body.as_array().expect("array body");
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0]["assignee"]["name"], "John Employee");
        assert!(rows[1].get("assignee").is_none());
    }

    #[actix_web::test]
    async fn assignment_overview_is_admin_only() {
        let (status, _) = get_as("jane@example.com", "/api/v1/dashboard/assignments").await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}
