//! Wire DTOs for the client/server REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads field for field so serde
//! can deserialize responses without adapter layers. Fields the client never
//! writes are still kept so a record can round-trip through serialization
//! unchanged.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `/api/users/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique user identifier.
    pub id: i64,
    /// Login name, unique per account.
    pub username: String,
    /// Contact email address.
    pub email: String,
    /// Optional display name.
    pub full_name: Option<String>,
    /// Access role, e.g. `"user"` or `"admin"`.
    pub role: String,
    /// Whether the account may authenticate.
    pub is_active: bool,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
}

impl UserRecord {
    /// Preferred display name: full name when present, else username.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.username)
    }

    /// Whether this user may access the admin page.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// A subscribable magazine or newspaper.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PublicationRecord {
    /// Unique publication identifier.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Category string, e.g. `"magazine"` or `"newspaper"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Publishing house, if known.
    pub publisher: Option<String>,
    /// Human-readable cadence, e.g. `"Weekly"`.
    pub frequency: Option<String>,
    /// Free-form description shown on the detail view.
    pub description: Option<String>,
    /// Cover image URL, if available.
    pub cover_image_url: Option<String>,
    /// Price for a one-month subscription.
    pub price_monthly: f64,
    /// Price for a twelve-month subscription.
    pub price_yearly: f64,
    /// Whether new subscriptions are accepted.
    pub is_available: bool,
}

/// Body of `POST /api/subscriptions`. Built transiently per submit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRequest {
    /// Publication being subscribed to.
    pub publication_id: i64,
    /// Subscription length: 1 (monthly) or 12 (yearly).
    pub duration_months: u32,
    /// Whether the subscription renews automatically at the end of the term.
    pub auto_renew: bool,
}

/// A subscription as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    /// Unique subscription identifier.
    pub id: i64,
    /// Publication this subscription is for.
    pub publication_id: i64,
    /// Owning user.
    pub user_id: i64,
    /// ISO 8601 date the term started.
    pub start_date: String,
    /// ISO 8601 date the term ends.
    pub end_date: String,
    /// Lifecycle status, e.g. `"active"` or `"cancelled"`.
    pub status: String,
    /// Whether the subscription renews automatically.
    pub auto_renew: bool,
    /// Embedded publication snapshot, when the endpoint expands it.
    #[serde(default)]
    pub publication: Option<PublicationRecord>,
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Token payload returned by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Bearer token to send in the `Authorization` header.
    pub access_token: String,
    /// Token scheme; the backend always sends `"bearer"`.
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// Fields for creating a publication from the admin page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewPublication {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price_monthly: f64,
    pub price_yearly: f64,
}
