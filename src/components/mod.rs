//! Reusable UI pieces shared by the pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components stay presentational: they read signals handed to them or
//! from context and never talk to the network.

pub mod form_field;
pub mod spinner;
pub mod toast;
