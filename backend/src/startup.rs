//! Assemble the store and HTTP state from configuration.

use std::path::PathBuf;
use std::sync::Arc;

use camino::Utf8PathBuf;
use mockable::DefaultClock;
use thiserror::Error;
use tracing::info;

use crate::domain::ports::IdentitySlotError;
use crate::domain::{ResourceStore, StoreDependencies, StoreTables};
use crate::inbound::http::state::HttpState;
use crate::outbound::identity::FileIdentitySlot;
use crate::outbound::notifications::NotificationFeed;
use crate::outbound::seed::{SeedMappingError, builtin_tables, tables_from_path};
use crate::settings::AppSettings;

/// Errors raised while preparing the service state.
#[derive(Debug, Error)]
pub enum StartupError {
    /// A configured path is not valid UTF-8.
    #[error("path is not valid UTF-8: {}", path.display())]
    NonUtf8Path {
        /// Offending path.
        path: PathBuf,
    },
    /// The seed document could not be loaded.
    #[error("failed to load seed data: {0}")]
    Seed(#[from] SeedMappingError),
    /// The identity directory could not be opened.
    #[error("failed to open identity slot: {0}")]
    IdentitySlot(#[from] IdentitySlotError),
}

fn utf8(path: PathBuf) -> Result<Utf8PathBuf, StartupError> {
    Utf8PathBuf::from_path_buf(path).map_err(|path| StartupError::NonUtf8Path { path })
}

fn load_tables(settings: &AppSettings) -> Result<StoreTables, StartupError> {
    match settings.seed_path.clone() {
        Some(path) => {
            let path = utf8(path)?;
            info!(path = %path, "loading seed document");
            Ok(tables_from_path(&path)?)
        }
        None => {
            info!("loading built-in demo data");
            Ok(builtin_tables()?)
        }
    }
}

/// Build the HTTP state: seed tables, a file-backed identity slot and a
/// notification feed.
///
/// # Errors
/// Returns [`StartupError`] when the seed cannot be loaded or the identity
/// directory cannot be opened.
pub fn build_http_state(settings: &AppSettings) -> Result<HttpState, StartupError> {
    let tables = load_tables(settings)?;
    let identity_dir = utf8(settings.identity_dir())?;
    let identity_slot = FileIdentitySlot::open(&identity_dir)?;
    let feed = Arc::new(NotificationFeed::with_capacity(
        settings.notification_capacity(),
    ));
    let store = ResourceStore::new(
        tables,
        StoreDependencies {
            clock: Arc::new(DefaultClock),
            notifier: feed.clone(),
            identity_slot: Arc::new(identity_slot),
        },
    );
    info!(
        users = store.users().len(),
        resources = store.resources().len(),
        assignments = store.assignments().len(),
        identity = store.identity().map(|user| user.id().as_str()),
        "store ready"
    );
    Ok(HttpState::new(store, feed))
}
