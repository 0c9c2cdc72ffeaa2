//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, alerts, navigation)
//! from page logic so the pages stay thin bindings over `rides` flows.

pub mod auth;
pub mod notify;
pub mod session;
