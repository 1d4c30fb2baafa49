//! Networking modules for the account, profile, and login endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the `AccountApi` seam and its HTTP implementation, and
//! `types` defines the wire schema shared with the backend.

pub mod api;
pub mod types;
