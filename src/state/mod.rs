//! Shared application state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` carries the authenticated identity; `nav` carries which page is
//! mounted. Both live in `RwSignal`s provided by [`crate::app::App`] so no
//! component reaches for an ambient singleton.

pub mod nav;
pub mod session;
