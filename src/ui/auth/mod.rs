//! Authentication UI module
//!
//! The shared sign-in / sign-up modal opened from the navbar.

mod auth_modal;

pub use auth_modal::AuthModal;
