//! Login, logout and the current identity.
//!
//! ```text
//! POST /api/v1/login {"email":"admin@example.com"}
//! POST /api/v1/logout
//! GET /api/v1/me
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, LoginRequest, LoginValidationError, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::guard::CurrentUser;
use crate::inbound::http::state::HttpState;

/// Login request body for `POST /api/v1/login`.
///
/// The password is accepted for client compatibility and ignored.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginBody {
    #[serde(default)]
    #[schema(example = "admin@example.com")]
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
}

/// The logged-in identity.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: User,
    pub is_admin: bool,
}

impl From<User> for SessionResponse {
    fn from(user: User) -> Self {
        Self {
            is_admin: user.is_admin(),
            user,
        }
    }
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::EmptyEmail => Error::invalid_request(err.to_string())
            .with_details(json!({ "field": "email", "code": "empty_email" })),
    }
}

/// Log in by email.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginBody,
    responses(
        (status = 200, description = "Login success", body = SessionResponse),
        (status = 400, description = "Blank email", body = Error),
        (status = 401, description = "No user with that email", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["session"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginBody>,
) -> ApiResult<web::Json<SessionResponse>> {
    let LoginBody { email, password } = payload.into_inner();
    let request = LoginRequest::try_from_parts(&email, password.as_deref())
        .map_err(map_login_validation_error)?;
    let user = state.write(|store| {
        if store.login(request.email()) {
            store.identity().cloned()
        } else {
            None
        }
    })?;
    let user = user.ok_or_else(|| {
        Error::unauthorized("No user found with that email address")
            .with_details(json!({ "field": "email", "code": "unknown_email" }))
    })?;
    Ok(web::Json(SessionResponse::from(user)))
}

/// Log out. Succeeds whether or not anyone was logged in.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["session"],
    operation_id = "logout"
)]
#[post("/logout")]
pub async fn logout(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    state.write(|store| store.logout())?;
    Ok(HttpResponse::NoContent().finish())
}

/// Return the logged-in identity.
#[utoipa::path(
    get,
    path = "/api/v1/me",
    responses(
        (status = 200, description = "Current identity", body = SessionResponse),
        (status = 401, description = "Not logged in", body = Error)
    ),
    tags = ["session"],
    operation_id = "currentUser"
)]
#[get("/me")]
pub async fn current_user(user: CurrentUser) -> web::Json<SessionResponse> {
    web::Json(SessionResponse::from(user.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::Value;

    use crate::inbound::http::test_utils::demo_state;

    fn test_app(
        state: HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().app_data(web::Data::new(state)).service(
            web::scope("/api/v1")
                .service(login)
                .service(logout)
                .service(current_user),
        )
    }

    fn login_request(email: &str) -> actix_test::TestRequest {
        actix_test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "email": email, "password": "ignored" }))
    }

    #[actix_web::test]
    async fn login_returns_identity() {
        let app = actix_test::init_service(test_app(demo_state())).await;

        let res =
            actix_test::call_service(&app, login_request("admin@example.com").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["user"]["id"], "1");
        assert_eq!(body["isAdmin"], true);

        let me = actix_test::TestRequest::get().uri("/api/v1/me").to_request();
        let res = actix_test::call_service(&app, me).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[rstest]
    #[case("   ", StatusCode::BAD_REQUEST, "empty_email")]
    #[case("ghost@example.com", StatusCode::UNAUTHORIZED, "unknown_email")]
    #[actix_web::test]
    async fn login_failures_are_reported(
        #[case] email: &str,
        #[case] status: StatusCode,
        #[case] code: &str,
    ) {
        let app = actix_test::init_service(test_app(demo_state())).await;

        let res = actix_test::call_service(&app, login_request(email).to_request()).await;
        assert_eq!(res.status(), status);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["details"]["code"], code);
    }

    #[actix_web::test]
    async fn logout_forgets_identity() {
        let app = actix_test::init_service(test_app(demo_state())).await;
        actix_test::call_service(&app, login_request("john@example.com").to_request()).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/logout")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let me = actix_test::TestRequest::get().uri("/api/v1/me").to_request();
        let res = actix_test::call_service(&app, me).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
