pub mod auth;
pub mod common;
pub mod destination_card;
pub mod dom;
pub mod icon;
pub mod navbar;
pub mod pages;
pub mod top_destination;

pub use auth::AuthModal;
pub use destination_card::DestinationCard;
pub use icon::{Icon, icons};
pub use navbar::Navbar;
pub use top_destination::{TopDestination, TourGrid};
