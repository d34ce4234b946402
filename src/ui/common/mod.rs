//! Common building blocks shared by the login page and the auth modal

pub mod form;
pub mod social;
pub mod spinner;

pub use form::{FieldTheme, IconInput, PasswordInput};
pub use social::{OrDivider, SocialButtons};
pub use spinner::InlineSpinner;
