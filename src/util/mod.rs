//! Utility helpers shared across console UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! store logic to improve reuse and testability.

pub mod auth;
pub mod persistence;
