//! Bearer-token persistence in `localStorage`.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths safely no-op
//! so server rendering stays deterministic. Token refresh and expiry are the
//! backend's concern; a stale token simply fails the next user fetch.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "newsstand_token";

/// Read the persisted bearer token, if any.
#[must_use]
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage
            .get_item(STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a freshly issued bearer token.
pub fn save(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the persisted token on logout.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
