//! Page modules for the top-level screens.
//!
//! ARCHITECTURE
//! ============
//! Exactly one page is mounted at a time by the router in `app`. Each page
//! owns its own fetch orchestration and delegates rendering details to
//! `components`.

pub mod admin;
pub mod auth;
pub mod home;
pub mod profile;
pub mod subscriptions;
