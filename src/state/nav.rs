//! Page navigation state.
//!
//! DESIGN
//! ======
//! Navigation is a plain enum matched exhaustively at the single router site
//! in `app`, not a URL router: switching pages is a pure state replacement
//! and unmounted pages drop all local state.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Top-level pages. Exactly one is mounted at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    /// Publication catalog with the detail modal.
    #[default]
    Home,
    /// Login/register forms.
    Auth,
    /// The signed-in user's subscriptions.
    Subscriptions,
    /// Publication management, admins only.
    Admin,
    /// Account information for the signed-in user.
    Profile,
}

impl Page {
    /// Every page, in header display order.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Subscriptions,
        Self::Admin,
        Self::Profile,
        Self::Auth,
    ];

    /// Label shown in the header nav.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Auth => "Sign In",
            Self::Subscriptions => "My Subscriptions",
            Self::Admin => "Admin",
            Self::Profile => "Profile",
        }
    }

    /// Whether this page appears in the nav for the given viewer.
    /// Home is always reachable; Auth only makes sense signed out; the
    /// account pages require a session; Admin additionally requires the
    /// admin role.
    #[must_use]
    pub fn visible_to(self, authenticated: bool, admin: bool) -> bool {
        match self {
            Self::Home => true,
            Self::Auth => !authenticated,
            Self::Subscriptions | Self::Profile => authenticated,
            Self::Admin => admin,
        }
    }
}
