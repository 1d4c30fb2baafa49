//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `registration`, `toast`) so pages
//! depend on small focused models. The app root creates one instance of
//! each and provides it as context.

pub mod registration;
pub mod session;
pub mod toast;
