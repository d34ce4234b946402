//! Simulated sign-in and sign-up.
//!
//! Nothing here talks to a server. Submitting a form waits a fixed delay and
//! reports success through an alert.

use std::time::Duration;

use derive_more::Display;

/// Delay before the auth modal reports success
pub const MODAL_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Delay before the login page reports success
pub const LOGIN_PAGE_SUBMIT_DELAY: Duration = Duration::from_millis(2000);

pub const LOGIN_PAGE_MESSAGE: &str = "Login functionality would be implemented here!";

/// Which form the auth modal shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
pub enum AuthView {
    #[default]
    #[display("login")]
    Login,
    #[display("signup")]
    Signup,
}

impl AuthView {
    pub fn toggled(self) -> Self {
        match self {
            AuthView::Login => AuthView::Signup,
            AuthView::Signup => AuthView::Login,
        }
    }

    pub fn is_signup(self) -> bool {
        self == AuthView::Signup
    }

    pub fn panel_heading(self) -> &'static str {
        match self {
            AuthView::Login => "Welcome Back to the Himalayas",
            AuthView::Signup => "Start Your Adventure Today",
        }
    }

    pub fn panel_blurb(self) -> &'static str {
        match self {
            AuthView::Login => {
                "Sign in to access your saved trips, exclusive offers, and personalized itinerary."
            }
            AuthView::Signup => {
                "Create an account to unlock exclusive deals and plan your dream trip to Nepal."
            }
        }
    }

    pub fn form_title(self) -> &'static str {
        match self {
            AuthView::Login => "Sign In",
            AuthView::Signup => "Create Account",
        }
    }

    pub fn form_subtitle(self) -> &'static str {
        match self {
            AuthView::Login => "Enter your details to proceed",
            AuthView::Signup => "Fill in your details to get started",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthView::Login => "Sign In",
            AuthView::Signup => "Sign Up",
        }
    }

    /// Alert text once the simulated request completes
    pub fn success_message(self) -> &'static str {
        match self {
            AuthView::Login => "Logged in successfully!",
            AuthView::Signup => "Signed up successfully!",
        }
    }

    pub fn footer_prompt(self) -> &'static str {
        match self {
            AuthView::Login => "Don't have an account?",
            AuthView::Signup => "Already have an account?",
        }
    }

    /// Label of the button that switches to the other view
    pub fn footer_action(self) -> &'static str {
        match self.toggled() {
            AuthView::Signup => "Sign Up",
            AuthView::Login => "Login",
        }
    }
}

/// `type` attribute of a password input with a show/hide toggle
pub fn password_input_type(show_password: bool) -> &'static str {
    if show_password { "text" } else { "password" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_login() {
        assert_eq!(AuthView::default(), AuthView::Login);
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(AuthView::Login.toggled(), AuthView::Signup);
        assert_eq!(AuthView::Signup.toggled(), AuthView::Login);
        assert_eq!(AuthView::Login.toggled().toggled(), AuthView::Login);
    }

    #[test]
    fn test_success_messages() {
        assert_eq!(AuthView::Login.success_message(), "Logged in successfully!");
        assert_eq!(AuthView::Signup.success_message(), "Signed up successfully!");
    }

    #[test]
    fn test_footer_points_to_other_view() {
        assert_eq!(AuthView::Login.footer_prompt(), "Don't have an account?");
        assert_eq!(AuthView::Login.footer_action(), "Sign Up");
        assert_eq!(AuthView::Signup.footer_prompt(), "Already have an account?");
        assert_eq!(AuthView::Signup.footer_action(), "Login");
    }

    #[test]
    fn test_form_copy_per_view() {
        assert_eq!(AuthView::Login.form_title(), "Sign In");
        assert_eq!(AuthView::Signup.form_title(), "Create Account");
        assert_eq!(AuthView::Signup.submit_label(), "Sign Up");
        assert!(AuthView::Signup.is_signup());
        assert!(!AuthView::Login.is_signup());
    }

    #[test]
    fn test_display() {
        assert_eq!(AuthView::Login.to_string(), "login");
        assert_eq!(AuthView::Signup.to_string(), "signup");
    }

    #[test]
    fn test_password_input_type() {
        assert_eq!(password_input_type(false), "password");
        assert_eq!(password_input_type(true), "text");
    }

    #[test]
    fn test_delays() {
        assert_eq!(MODAL_SUBMIT_DELAY.as_millis(), 1500);
        assert_eq!(LOGIN_PAGE_SUBMIT_DELAY.as_millis(), 2000);
    }
}
