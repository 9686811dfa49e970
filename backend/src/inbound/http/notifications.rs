//! Recent notifications.
//!
//! ```text
//! GET /api/v1/notifications
//! ```

use actix_web::{get, web};

use crate::domain::Notification;
use crate::inbound::http::state::HttpState;

/// Notifications emitted by recent operations, oldest first.
///
/// Public so a failed login can still be reported to the visitor.
#[utoipa::path(
    get,
    path = "/api/v1/notifications",
    responses(
        (status = 200, description = "Recent notifications", body = [Notification])
    ),
    tags = ["notifications"],
    operation_id = "recentNotifications",
    security([])
)]
#[get("/notifications")]
pub async fn recent_notifications(state: web::Data<HttpState>) -> web::Json<Vec<Notification>> {
    web::Json(state.recent_notifications())
}
