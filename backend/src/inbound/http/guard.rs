//! Route guards expressed as Actix extractors.
//!
//! Handlers name the access level they need in their signature:
//! [`CurrentUser`] for any logged-in user, [`AdminUser`] for admins. A failed
//! check short-circuits the request with `401` (no identity) or `403`
//! (employee on an admin route); the error details carry the page the client
//! should redirect to.

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::{Ready, ready};
use serde_json::json;

use crate::domain::{AccessDecision, AccessLevel, Error, Page, User};
use crate::inbound::http::state::HttpState;

/// The logged-in user.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// The logged-in user, known to be an admin.
#[derive(Debug, Clone)]
pub struct AdminUser(pub User);

fn redirect_error(target: Page) -> Error {
    let error = match target {
        Page::Login => Error::unauthorized("login required"),
        _ => Error::forbidden("admin access required"),
    };
    error.with_details(json!({ "redirect": target.path() }))
}

fn guard(req: &HttpRequest, level: AccessLevel) -> Result<User, Error> {
    let state = req
        .app_data::<web::Data<HttpState>>()
        .ok_or_else(|| Error::internal("HTTP state is not configured"))?;
    state.read(|store| {
        let identity = store.identity();
        match (level.check(identity), identity) {
            (AccessDecision::Allow, Some(user)) => Ok(user.clone()),
            (AccessDecision::Allow, None) => Err(redirect_error(Page::Login)),
            (AccessDecision::Redirect(target), _) => Err(redirect_error(target)),
        }
    })?
}

impl FromRequest for CurrentUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(guard(req, AccessLevel::Authenticated).map(Self))
    }
}

impl FromRequest for AdminUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(guard(req, AccessLevel::Admin).map(Self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test};
    use rstest::rstest;
    use serde_json::Value;

    use crate::inbound::http::test_utils::demo_state;

    async fn probe(login_as: Option<&str>, path: &str) -> (StatusCode, Value) {
        let state = demo_state();
        if let Some(email) = login_as {
            state
                .write(|store| store.login(email))
                .expect("store lock");
        }
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .route(
                    "/any",
                    web::get().to(|user: CurrentUser| async move {
                        HttpResponse::Ok().body(user.0.id().to_string())
                    }),
                )
                .route(
                    "/admin",
                    web::get().to(|user: AdminUser| async move {
                        HttpResponse::Ok().body(user.0.id().to_string())
                    }),
                ),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;
        let status = res.status();
        let body = test::read_body(res).await;
        let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, value)
    }

    #[rstest]
    #[case(None, "/any", StatusCode::UNAUTHORIZED, Some("/login"))]
    #[case(None, "/admin", StatusCode::UNAUTHORIZED, Some("/login"))]
    #[case(Some("john@example.com"), "/any", StatusCode::OK, None)]
    #[case(Some("john@example.com"), "/admin", StatusCode::FORBIDDEN, Some("/dashboard"))]
    #[case(Some("admin@example.com"), "/admin", StatusCode::OK, None)]
    #[actix_web::test]
    async fn guards_enforce_access_levels(
        #[case] login_as: Option<&str>,
        #[case] path: &str,
        #[case] expected_status: StatusCode,
        #[case] redirect: Option<&str>,
    ) {
        let (status, body) = probe(login_as, path).await;
        assert_eq!(status, expected_status);
        if let Some(target) = redirect {
            assert_eq!(body["details"]["redirect"], target);
        }
    }
}
