//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser storage, route guards, and form validation used by the pages.

pub mod auth;
pub mod storage;
pub mod validation;
