//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Http`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>` so pages can render inline
//! failure messages without panicking, and can show server-provided text
//! only when the failure is the structured kind.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::error::structured_error;
use super::types::{
    LoginRequest, NewPublication, PublicationRecord, RegisterRequest, SubscriptionRecord,
    SubscriptionRequest, TokenResponse, UserRecord,
};

#[cfg(any(test, feature = "hydrate"))]
fn publications_url(kind: Option<&str>) -> String {
    match kind {
        Some(kind) if !kind.is_empty() => format!("/api/publications?type={kind}"),
        _ => "/api/publications".to_owned(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn admin_publications_url() -> String {
    "/api/publications?include_unavailable=true".to_owned()
}

#[cfg(any(test, feature = "hydrate"))]
fn publication_url(id: i64) -> String {
    format!("/api/publications/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn subscription_url(id: i64) -> String {
    format!("/api/subscriptions/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(not(feature = "hydrate"))]
fn server_stub<T>() -> Result<T, ApiError> {
    Err(ApiError::Http("not available on server".to_owned()))
}

/// Read a response body, mapping non-2xx statuses to structured errors.
#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Http(e.to_string()))?;
    if !(200..300).contains(&status) {
        return Err(structured_error(status, &body));
    }
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Check a response that carries no interesting body (e.g. DELETE).
#[cfg(feature = "hydrate")]
async fn read_empty(response: gloo_net::http::Response) -> Result<(), ApiError> {
    let status = response.status();
    if (200..300).contains(&status) {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(structured_error(status, &body))
}

/// Exchange credentials for a bearer token via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a rejected login.
pub async fn login(request: &LoginRequest) -> Result<TokenResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gloo_net::http::Request::post("/api/auth/login")
            .json(request)
            .map_err(|e| ApiError::Http(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Http(e.to_string()))?;
        read_json(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        server_stub()
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a rejected registration.
pub async fn register(request: &RegisterRequest) -> Result<UserRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gloo_net::http::Request::post("/api/auth/register")
            .json(request)
            .map_err(|e| ApiError::Http(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Http(e.to_string()))?;
        read_json(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        server_stub()
    }
}

/// Fetch the authenticated user via `GET /api/users/me`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or an invalid/expired token.
pub async fn fetch_current_user(token: &str) -> Result<UserRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gloo_net::http::Request::get("/api/users/me")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Http(e.to_string()))?;
        read_json(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        server_stub()
    }
}

/// List available publications via `GET /api/publications`, optionally
/// narrowed to one type.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a rejected request.
pub async fn list_publications(kind: Option<&str>) -> Result<Vec<PublicationRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = publications_url(kind);
        let response = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Http(e.to_string()))?;
        read_json(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = kind;
        server_stub()
    }
}

/// List every publication, including unavailable ones, for the admin page.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or when the caller is not an
/// admin.
pub async fn list_all_publications(token: &str) -> Result<Vec<PublicationRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = admin_publications_url();
        let response = gloo_net::http::Request::get(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Http(e.to_string()))?;
        read_json(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        server_stub()
    }
}

/// Create a publication via `POST /api/publications` (admin only).
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a rejected request.
pub async fn create_publication(
    token: &str,
    publication: &NewPublication,
) -> Result<PublicationRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gloo_net::http::Request::post("/api/publications")
            .header("Authorization", &bearer(token))
            .json(publication)
            .map_err(|e| ApiError::Http(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Http(e.to_string()))?;
        read_json(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, publication);
        server_stub()
    }
}

/// Flip a publication's availability via `PATCH /api/publications/{id}`
/// (admin only).
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a rejected request.
pub async fn set_publication_availability(
    token: &str,
    id: i64,
    is_available: bool,
) -> Result<PublicationRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = publication_url(id);
        let payload = serde_json::json!({ "is_available": is_available });
        let response = gloo_net::http::Request::patch(&url)
            .header("Authorization", &bearer(token))
            .json(&payload)
            .map_err(|e| ApiError::Http(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Http(e.to_string()))?;
        read_json(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, is_available);
        server_stub()
    }
}

/// Create a subscription via `POST /api/subscriptions`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a rejected request; the
/// structured variant carries the server's message for display.
pub async fn create_subscription(
    token: &str,
    request: &SubscriptionRequest,
) -> Result<SubscriptionRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gloo_net::http::Request::post("/api/subscriptions")
            .header("Authorization", &bearer(token))
            .json(request)
            .map_err(|e| ApiError::Http(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Http(e.to_string()))?;
        read_json(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request);
        server_stub()
    }
}

/// List the caller's subscriptions via `GET /api/subscriptions`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or an invalid token.
pub async fn list_subscriptions(token: &str) -> Result<Vec<SubscriptionRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gloo_net::http::Request::get("/api/subscriptions")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Http(e.to_string()))?;
        read_json(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        server_stub()
    }
}

/// Cancel a subscription via `DELETE /api/subscriptions/{id}`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a rejected request.
pub async fn cancel_subscription(token: &str, id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = subscription_url(id);
        let response = gloo_net::http::Request::delete(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Http(e.to_string()))?;
        read_empty(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        server_stub()
    }
}
