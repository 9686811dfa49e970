//! Page-level access rules.
//!
//! Every page requires an identity except `/login`; `/users` and
//! `/settings` additionally require the admin role. A denied request is
//! redirected rather than rejected: anonymous visitors go to the login page
//! and employees asking for an admin page go to the dashboard.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use super::User;

/// Who may reach a page or endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// Anyone, logged in or not.
    Public,
    /// Any logged-in user.
    Authenticated,
    /// Logged-in admins only.
    Admin,
}

impl AccessLevel {
    /// Decide whether `identity` meets this level.
    pub fn check(self, identity: Option<&User>) -> AccessDecision {
        match (self, identity) {
            (Self::Public, _) => AccessDecision::Allow,
            (_, None) => AccessDecision::Redirect(Page::Login),
            (Self::Authenticated, Some(_)) => AccessDecision::Allow,
            (Self::Admin, Some(user)) if user.is_admin() => AccessDecision::Allow,
            (Self::Admin, Some(_)) => AccessDecision::Redirect(Page::Dashboard),
        }
    }
}

/// Outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The page may be shown.
    Allow,
    /// The page must not be shown; send the visitor here instead.
    Redirect(Page),
}

/// Navigable pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// `/login`
    Login,
    /// `/dashboard`
    Dashboard,
    /// `/resources`
    Resources,
    /// `/users`
    Users,
    /// `/settings`
    Settings,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Page; 5] = [
        Page::Login,
        Page::Dashboard,
        Page::Resources,
        Page::Users,
        Page::Settings,
    ];

    /// Route path, including the leading slash.
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Resources => "/resources",
            Self::Users => "/users",
            Self::Settings => "/settings",
        }
    }

    /// Access level required to view the page.
    pub fn access_level(self) -> AccessLevel {
        match self {
            Self::Login => AccessLevel::Public,
            Self::Dashboard | Self::Resources => AccessLevel::Authenticated,
            Self::Users | Self::Settings => AccessLevel::Admin,
        }
    }

    /// Decide whether `identity` may view the page.
    ///
    /// # Examples
    /// ```
    /// use resource_desk::domain::{AccessDecision, Page};
    ///
    /// assert_eq!(Page::Users.check(None), AccessDecision::Redirect(Page::Login));
    /// assert_eq!(Page::Login.check(None), AccessDecision::Allow);
    /// ```
    pub fn check(self, identity: Option<&User>) -> AccessDecision {
        self.access_level().check(identity)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Returned when a path names no known page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no page at {path}")]
pub struct UnknownPageError {
    path: String,
}

impl UnknownPageError {
    /// The path that was looked up.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl FromStr for Page {
    type Err = UnknownPageError;

    /// Accepts paths with or without the leading slash. The root path
    /// resolves to the dashboard.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalised = value.strip_prefix('/').unwrap_or(value);
        if normalised.is_empty() {
            return Ok(Self::Dashboard);
        }
        Self::ALL
            .into_iter()
            .find(|page| page.path().strip_prefix('/') == Some(normalised))
            .ok_or_else(|| UnknownPageError {
                path: value.to_owned(),
            })
    }
}
