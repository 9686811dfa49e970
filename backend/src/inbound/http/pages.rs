//! Page access checks for client-side navigation.
//!
//! ```text
//! GET /api/v1/pages/users/access
//! ```
//!
//! The answer names the page to redirect to when access is denied, so a
//! client can route without duplicating the role rules.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{AccessDecision, Error, Page, UnknownPageError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Result of checking one page for the current identity.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageAccessResponse {
    #[schema(example = "/users")]
    pub page: String,
    pub allowed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "/dashboard")]
    pub redirect: Option<String>,
}

/// Check whether the current identity may open a page.
#[utoipa::path(
    get,
    path = "/api/v1/pages/{page}/access",
    params(("page" = String, Path, description = "Page name, e.g. `users`")),
    responses(
        (status = 200, description = "Access decision", body = PageAccessResponse),
        (status = 404, description = "Unknown page", body = Error)
    ),
    tags = ["pages"],
    operation_id = "pageAccess",
    security([])
)]
#[get("/pages/{page}/access")]
pub async fn page_access(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<PageAccessResponse>> {
    let page = path
        .into_inner()
        .parse::<Page>()
        .map_err(|err: UnknownPageError| {
            Error::not_found(err.to_string()).with_details(json!({ "page": err.path() }))
        })?;
    let decision = state.read(|store| page.check(store.identity()))?;
    let redirect = match decision {
        AccessDecision::Allow => None,
        AccessDecision::Redirect(target) => Some(target.path().to_owned()),
    };
    Ok(web::Json(PageAccessResponse {
        page: page.path().to_owned(),
        allowed: redirect.is_none(),
        redirect,
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use rstest::rstest;
    use serde_json::{Value, json};

    use crate::inbound::http::configure;
    use crate::inbound::http::test_utils::demo_state;

    async fn check(email: Option<&str>, page: &str) -> (StatusCode, Value) {
        let state = demo_state();
        if let Some(email) = email {
            assert!(state.write(|store| store.login(email)).expect("store lock"));
        }
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;
        let uri = format!("/api/v1/pages/{page}/access");
        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(&uri).to_request())
                .await;
        let status = res.status();
        let body = actix_test::read_body(res).await;
        (status, serde_json::from_slice(&body).expect("JSON body"))
    }

    #[rstest]
    #[case(None, "login", json!({"page": "/login", "allowed": true}))]
    #[case(None, "resources", json!({"page": "/resources", "allowed": false, "redirect": "/login"}))]
    #[case(Some("john@example.com"), "dashboard", json!({"page": "/dashboard", "allowed": true}))]
    #[case(Some("john@example.com"), "settings", json!({"page": "/settings", "allowed": false, "redirect": "/dashboard"}))]
    #[case(Some("admin@example.com"), "users", json!({"page": "/users", "allowed": true}))]
    #[actix_web::test]
    async fn decisions_follow_role(
        #[case] email: Option<&str>,
        #[case] page: &str,
        #[case] expected: Value,
    ) {
        let (status, body) = check(email, page).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, expected);
    }

    #[actix_web::test]
    async fn unknown_page_is_not_found() {
        let (status, body) = check(None, "reports").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["details"]["page"], "reports");
    }
}
