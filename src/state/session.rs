//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by every identity-aware component; written only through its own
//! methods from the auth forms, the logout control, and the background
//! user-refresh effect in `app`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::UserRecord;

/// In-memory session: bearer token plus the fetched user snapshot.
///
/// `loading` is true while the background `/api/users/me` fetch for a
/// restored token is in flight, so pages can distinguish "not logged in"
/// from "still resolving".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserRecord>,
    pub loading: bool,
}

impl SessionState {
    /// Session restored from a persisted token; the user is fetched next.
    #[must_use]
    pub fn restored(token: String) -> Self {
        Self {
            token: Some(token),
            user: None,
            loading: true,
        }
    }

    /// Whether a bearer token is present (the user fetch may still be pending).
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Whether the resolved user may access the admin page.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(UserRecord::is_admin)
    }

    /// Install a freshly issued token. The user snapshot is cleared so the
    /// refresh effect replaces it wholesale.
    pub fn begin(&mut self, token: String) {
        self.token = Some(token);
        self.user = None;
        self.loading = true;
    }

    /// Store the fetched user snapshot.
    pub fn resolve_user(&mut self, user: UserRecord) {
        self.user = Some(user);
        self.loading = false;
    }

    /// Record that the background user fetch finished without a user.
    /// The previous user value, if any, stays in place.
    pub fn resolve_failed(&mut self) {
        self.loading = false;
    }

    /// Drop the token and user.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
        self.loading = false;
    }
}
