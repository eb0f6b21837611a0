//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `error` classifies failures, and `types`
//! defines the wire schema shared by every page.

pub mod api;
pub mod error;
pub mod types;
