//! Tests for the service bootstrap.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

use resource_desk::domain::ports::MemoryIdentitySlot;
use resource_desk::domain::{ResourceStore, StoreDependencies};
use resource_desk::inbound::http::health::HealthState;
use resource_desk::inbound::http::state::HttpState;
use resource_desk::outbound::notifications::NotificationFeed;
use resource_desk::outbound::seed::builtin_tables;

use super::server::{ServerConfig, create_server};

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn http_state() -> HttpState {
    let feed = Arc::new(NotificationFeed::default());
    let store = ResourceStore::new(
        builtin_tables().expect("built-in seed maps"),
        StoreDependencies {
            clock: Arc::new(DefaultClock),
            notifier: feed.clone(),
            identity_slot: Arc::new(MemoryIdentitySlot::default()),
        },
    );
    HttpState::new(store, feed)
}

#[fixture]
fn server_config() -> ServerConfig {
    ServerConfig::new("127.0.0.1:0".parse().expect("loopback address"))
}

#[rstest]
#[actix_web::test]
async fn create_server_marks_ready(
    health_state: web::Data<HealthState>,
    http_state: HttpState,
    server_config: ServerConfig,
) {
    assert!(!health_state.is_ready(), "state should start unready");
    assert_eq!(server_config.bind_addr().port(), 0);

    let _server = create_server(health_state.clone(), http_state, server_config)
        .expect("server should bind an ephemeral port");

    assert!(
        health_state.is_ready(),
        "server creation should mark readiness"
    );
}
