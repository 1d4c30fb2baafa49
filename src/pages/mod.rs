//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering
//! details to `components`. Decision logic that does not need the DOM
//! lives in plain functions next to the component so it can be unit tested.

pub mod entry;
pub mod home;
pub mod login;
pub mod register;
pub mod register_profile;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const REGISTER_PROFILE_PATH: &str = "/register/profile";
