//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the catalog and form surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod header;
pub mod login_form;
pub mod publication_card;
pub mod publication_detail;
pub mod publications_list;
pub mod register_form;
