//! Application pages module
//!
//! - Home page (hero and top destinations)
//! - Login page
//! - Destinations listing
//! - Not found page

mod destinations;
mod home;
mod login;
mod not_found;

pub use destinations::DestinationsPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
