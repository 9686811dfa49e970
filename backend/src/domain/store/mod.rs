//! The resource store: users, resources, assignments and the current
//! identity, plus every operation that reads or changes them.
//!
//! Operations run to completion synchronously and never fail. Unknown ids
//! turn into `false`, empty results or no-ops. Each mutation emits a
//! [`Notification`] through the injected [`Notifier`]. The logged-in identity
//! is mirrored to an [`IdentitySlot`]; slot failures are logged and ignored.
//!
//! Invariants maintained by every operation:
//! - a resource has at most one assignment;
//! - a resource is `assigned` exactly when an assignment references it;
//! - assignments only reference existing users and resources.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::Clock;
use tracing::{debug, warn};

use super::ports::{IdentitySlot, Notifier};
use super::views::{
    DASHBOARD_RECENT_LIMIT, DashboardSummary, ResourceDetails, ResourceFilter, UserOverview,
};
use super::{
    Assignment, AssignmentId, Notification, Resource, ResourceDraft, ResourceId, ResourcePatch,
    ResourceStatus, User, UserId,
};

/// Destructive notification emitted when no user owns the email.
pub const LOGIN_FAILED_TITLE: &str = "Login Failed";

/// Initial contents of the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreTables {
    users: Vec<User>,
    resources: Vec<Resource>,
    assignments: Vec<Assignment>,
}

impl StoreTables {
    /// Bundle the three tables.
    ///
    /// Resource statuses are recomputed from `assignments`, so the status
    /// carried by each resource is only a hint.
    pub fn new(users: Vec<User>, resources: Vec<Resource>, assignments: Vec<Assignment>) -> Self {
        let mut tables = Self {
            users,
            resources,
            assignments,
        };
        tables.reconcile_statuses();
        tables
    }

    /// Directory entries.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Resources in insertion order.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Assignments in insertion order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    fn reconcile_statuses(&mut self) {
        for resource in &mut self.resources {
            let held = self
                .assignments
                .iter()
                .any(|assignment| assignment.resource_id() == resource.id());
            let status = if held {
                ResourceStatus::Assigned
            } else {
                ResourceStatus::Available
            };
            if resource.status() != status {
                let updated_at = resource.updated_at();
                resource.set_status(status, updated_at);
            }
        }
    }
}

/// Collaborators injected into the store.
#[derive(Clone)]
pub struct StoreDependencies {
    /// Source of `createdAt`, `updatedAt` and `assignedAt` timestamps.
    pub clock: Arc<dyn Clock>,
    /// Receives every notification.
    pub notifier: Arc<dyn Notifier>,
    /// Mirrors the logged-in identity.
    pub identity_slot: Arc<dyn IdentitySlot>,
}

/// In-memory state store.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use mockable::DefaultClock;
/// use resource_desk::domain::ports::{MemoryIdentitySlot, NoOpNotifier};
/// use resource_desk::domain::{ResourceStore, StoreDependencies, StoreTables};
///
/// let deps = StoreDependencies {
///     clock: Arc::new(DefaultClock),
///     notifier: Arc::new(NoOpNotifier),
///     identity_slot: Arc::new(MemoryIdentitySlot::default()),
/// };
/// let mut store = ResourceStore::new(StoreTables::default(), deps);
/// assert!(!store.login("nobody@example.com"));
/// assert!(store.identity().is_none());
/// ```
pub struct ResourceStore {
    tables: StoreTables,
    identity: Option<User>,
    clock: Arc<dyn Clock>,
    notifier: Arc<dyn Notifier>,
    identity_slot: Arc<dyn IdentitySlot>,
}

impl ResourceStore {
    /// Build a store and restore any identity persisted by a previous run.
    ///
    /// A slot that cannot be parsed is cleared and the store starts with no
    /// identity.
    pub fn new(tables: StoreTables, deps: StoreDependencies) -> Self {
        let StoreDependencies {
            clock,
            notifier,
            identity_slot,
        } = deps;
        let identity = restore_identity(identity_slot.as_ref());
        Self {
            tables,
            identity,
            clock,
            notifier,
            identity_slot,
        }
    }

    /// Logged-in user, if any.
    pub fn identity(&self) -> Option<&User> {
        self.identity.as_ref()
    }

    /// Whether the logged-in user is an admin.
    pub fn is_admin(&self) -> bool {
        self.identity.as_ref().is_some_and(User::is_admin)
    }

    /// Directory entries in seed order.
    pub fn users(&self) -> &[User] {
        self.tables.users()
    }

    /// Resources in insertion order.
    pub fn resources(&self) -> &[Resource] {
        self.tables.resources()
    }

    /// Assignments in insertion order.
    pub fn assignments(&self) -> &[Assignment] {
        self.tables.assignments()
    }

    /// Look up a user by id.
    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.tables.users.iter().find(|user| user.id() == id)
    }

    /// Look up a resource by id.
    pub fn resource(&self, id: &ResourceId) -> Option<&Resource> {
        self.tables
            .resources
            .iter()
            .find(|resource| resource.id() == id)
    }

    /// Log in as the user owning `email`. The comparison is exact.
    pub fn login(&mut self, email: &str) -> bool {
        let Some(user) = self
            .tables
            .users
            .iter()
            .find(|user| user.email().as_ref() == email)
            .cloned()
        else {
            debug!(email, "login rejected: unknown email");
            self.notify(Notification::destructive(
                LOGIN_FAILED_TITLE,
                "No user found with that email address. Try 'admin@example.com' or 'john@example.com'.",
            ));
            return false;
        };

        self.persist_identity(&user);
        debug!(user_id = %user.id(), "login accepted");
        self.notify(Notification::info(
            "Logged in successfully",
            format!("Welcome back, {}!", user.name()),
        ));
        self.identity = Some(user);
        true
    }

    /// Forget the logged-in user and clear the slot.
    pub fn logout(&mut self) {
        self.identity = None;
        if let Err(error) = self.identity_slot.clear() {
            warn!(%error, "failed to clear persisted identity");
        }
        debug!("logged out");
        self.notify(Notification::info(
            "Logged out",
            "You have been logged out successfully.",
        ));
    }

    /// Append a new, available resource and return its id.
    pub fn add_resource(&mut self, draft: ResourceDraft) -> ResourceId {
        let id = ResourceId::random();
        let title = draft.title().to_owned();
        let resource = Resource::create(id.clone(), draft, self.now());
        self.tables.resources.push(resource);
        debug!(resource_id = %id, "resource created");
        self.notify(Notification::info(
            "Resource Created",
            format!("{title} has been added successfully."),
        ));
        id
    }

    /// Merge `patch` into the resource. Returns `false` for unknown ids.
    pub fn update_resource(&mut self, id: &ResourceId, patch: ResourcePatch) -> bool {
        let now = self.now();
        let Some(resource) = self.resource_mut(id) else {
            debug!(resource_id = %id, "update ignored: unknown resource");
            return false;
        };
        resource.apply(patch, now);
        debug!(resource_id = %id, "resource updated");
        self.notify(Notification::info(
            "Resource Updated",
            "The resource has been updated successfully.",
        ));
        true
    }

    /// Remove the resource and its assignment. Deleting twice is harmless;
    /// only the call that removed something returns `true`.
    pub fn delete_resource(&mut self, id: &ResourceId) -> bool {
        self.tables
            .assignments
            .retain(|assignment| assignment.resource_id() != id);
        let before = self.tables.resources.len();
        self.tables.resources.retain(|resource| resource.id() != id);
        let removed = self.tables.resources.len() != before;
        if removed {
            debug!(resource_id = %id, "resource deleted");
            self.notify(Notification::info(
                "Resource Deleted",
                "The resource has been deleted.",
            ));
        }
        removed
    }

    /// Hand the resource to the user, replacing any existing assignment.
    ///
    /// Returns `false`, changing nothing, when either id is unknown.
    pub fn assign_resource(
        &mut self,
        resource_id: &ResourceId,
        user_id: &UserId,
        due_date: Option<DateTime<Utc>>,
    ) -> bool {
        let Some(user) = self.user(user_id).cloned() else {
            debug!(%user_id, "assignment ignored: unknown user");
            return false;
        };
        let now = self.now();
        let Some(resource) = self.resource_mut(resource_id) else {
            debug!(%resource_id, "assignment ignored: unknown resource");
            return false;
        };
        resource.set_status(ResourceStatus::Assigned, now);

        self.tables
            .assignments
            .retain(|assignment| assignment.resource_id() != resource_id);
        let assignment = Assignment::new(
            AssignmentId::random(),
            user.id().clone(),
            resource_id.clone(),
            now,
        )
        .with_due_date(due_date);
        self.tables.assignments.push(assignment);

        debug!(%resource_id, %user_id, "resource assigned");
        self.notify(Notification::info(
            "Resource Assigned",
            format!("Resource has been assigned to {}.", user.name()),
        ));
        true
    }

    /// Drop the resource's assignment, if any, and mark it available.
    ///
    /// Returns `false` for unknown resources.
    pub fn unassign_resource(&mut self, resource_id: &ResourceId) -> bool {
        let now = self.now();
        let Some(resource) = self.resource_mut(resource_id) else {
            debug!(%resource_id, "unassignment ignored: unknown resource");
            return false;
        };
        resource.set_status(ResourceStatus::Available, now);
        self.tables
            .assignments
            .retain(|assignment| assignment.resource_id() != resource_id);
        debug!(%resource_id, "resource unassigned");
        self.notify(Notification::info(
            "Resource Unassigned",
            "Resource is now available.",
        ));
        true
    }

    /// Resources assigned to the user, in resource-table order.
    pub fn user_resources(&self, user_id: &UserId) -> Vec<Resource> {
        self.tables
            .resources
            .iter()
            .filter(|resource| {
                self.tables.assignments.iter().any(|assignment| {
                    assignment.user_id() == user_id && assignment.resource_id() == resource.id()
                })
            })
            .cloned()
            .collect()
    }

    /// The user currently holding the resource.
    pub fn resource_user(&self, resource_id: &ResourceId) -> Option<User> {
        self.tables
            .assignments
            .iter()
            .find(|assignment| assignment.resource_id() == resource_id)
            .and_then(|assignment| self.user(assignment.user_id()))
            .cloned()
    }

    /// Assignment record for the resource.
    pub fn assignment_for(&self, resource_id: &ResourceId) -> Option<&Assignment> {
        self.tables
            .assignments
            .iter()
            .find(|assignment| assignment.resource_id() == resource_id)
    }

    /// Resources the logged-in user may see, narrowed by `filter`.
    ///
    /// Admins see the whole table filtered by every criterion. Employees see
    /// their own resources filtered by the search term only. Nothing is
    /// visible without an identity.
    pub fn visible_resources(&self, filter: &ResourceFilter) -> Vec<Resource> {
        match &self.identity {
            None => Vec::new(),
            Some(user) if user.is_admin() => self
                .tables
                .resources
                .iter()
                .filter(|resource| filter.matches(resource))
                .cloned()
                .collect(),
            Some(user) => self
                .user_resources(user.id())
                .into_iter()
                .filter(|resource| filter.matches_search(resource))
                .collect(),
        }
    }

    /// Dashboard counts and resource list for the logged-in user.
    pub fn dashboard(&self) -> Option<DashboardSummary> {
        let user = self.identity.as_ref()?;
        let mine = self.user_resources(user.id());
        let my_resources = mine.len();
        if !user.is_admin() {
            return Some(DashboardSummary {
                my_resources,
                total_resources: None,
                total_assigned: None,
                resources: mine,
            });
        }
        let assigned = self
            .tables
            .resources
            .iter()
            .filter(|resource| resource.status() == ResourceStatus::Assigned)
            .count();
        Some(DashboardSummary {
            my_resources,
            total_resources: Some(self.tables.resources.len()),
            total_assigned: Some(assigned),
            resources: self
                .tables
                .resources
                .iter()
                .take(DASHBOARD_RECENT_LIMIT)
                .cloned()
                .collect(),
        })
    }

    /// Every user with the titles of the resources they hold.
    pub fn user_overview(&self) -> Vec<UserOverview> {
        self.tables
            .users
            .iter()
            .map(|user| {
                let resource_titles: Vec<String> = self
                    .user_resources(user.id())
                    .iter()
                    .map(|resource| resource.title().to_owned())
                    .collect();
                UserOverview {
                    user: user.clone(),
                    resource_count: resource_titles.len(),
                    resource_titles,
                }
            })
            .collect()
    }

    /// Every resource paired with its assignee.
    pub fn resource_details(&self) -> Vec<ResourceDetails> {
        self.tables
            .resources
            .iter()
            .map(|resource| ResourceDetails {
                resource: resource.clone(),
                assignee: self.resource_user(resource.id()),
            })
            .collect()
    }

    fn resource_mut(&mut self, id: &ResourceId) -> Option<&mut Resource> {
        self.tables
            .resources
            .iter_mut()
            .find(|resource| resource.id() == id)
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }

    fn notify(&self, notification: Notification) {
        self.notifier.notify(notification);
    }

    fn persist_identity(&self, user: &User) {
        let result = serde_json::to_string(user)
            .map_err(|error| error.to_string())
            .and_then(|json| {
                self.identity_slot
                    .store(&json)
                    .map_err(|error| error.to_string())
            });
        if let Err(error) = result {
            warn!(%error, user_id = %user.id(), "failed to persist identity");
        }
    }
}

fn restore_identity(slot: &dyn IdentitySlot) -> Option<User> {
    let raw = match slot.load() {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(error) => {
            warn!(%error, "failed to read persisted identity");
            return None;
        }
    };
    match serde_json::from_str::<User>(&raw) {
        Ok(user) => {
            debug!(user_id = %user.id(), "restored persisted identity");
            Some(user)
        }
        Err(error) => {
            warn!(%error, "discarding unreadable persisted identity");
            if let Err(error) = slot.clear() {
                warn!(%error, "failed to clear persisted identity");
            }
            None
        }
    }
}
