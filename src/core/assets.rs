//! Paths of the photos served from `public/`

/// Banner photo of the home page
pub const HERO_IMAGE: &str = "/hero.svg";

/// Backdrop of the login page and the modal's welcome panel
pub const LOGIN_BACKGROUND: &str = "/login-bg.svg";
