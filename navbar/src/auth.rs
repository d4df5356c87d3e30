//! Identity capability consumed by the navbar.

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Cohort placeholder assigned before onboarding is finished.
const NO_COHORT: &str = "NO_COHORT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub dojo_cohort: String,
}

/// A user has a profile once they picked a display name and a cohort.
pub fn has_created_profile(user: &User) -> bool {
    !user.display_name.is_empty() && !user.dojo_cohort.is_empty() && user.dojo_cohort != NO_COHORT
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "user", rename_all = "snake_case")]
pub enum AuthStatus {
    Loading,
    Unauthenticated,
    Authenticated(User),
}

impl AuthStatus {
    pub fn user(&self) -> Option<&User> {
        match self {
            AuthStatus::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Current-user presence plus sign-out, as provided by the auth layer.
pub trait IdentityProvider {
    fn status(&self) -> &AuthStatus;

    fn sign_out(&mut self);

    fn user(&self) -> Option<&User> {
        self.status().user()
    }

    fn has_created_profile(&self) -> bool {
        self.user().is_some_and(has_created_profile)
    }
}

/// In-memory session, optionally seeded from JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalSession {
    status: AuthStatus,
}

impl Default for LocalSession {
    fn default() -> Self {
        Self {
            status: AuthStatus::Loading,
        }
    }
}

impl LocalSession {
    pub fn new(status: AuthStatus) -> Self {
        Self { status }
    }

    pub fn signed_in(user: User) -> Self {
        Self::new(AuthStatus::Authenticated(user))
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }
}

impl IdentityProvider for LocalSession {
    fn status(&self) -> &AuthStatus {
        &self.status
    }

    fn sign_out(&mut self) {
        if let Some(user) = self.status.user() {
            tracing::info!(username = %user.username, "Signing out");
        }
        self.status = AuthStatus::Unauthenticated;
    }
}
