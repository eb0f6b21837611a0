//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic so the decision logic stays unit-testable.

pub mod format;
pub mod query;
pub mod token_store;
