//! Domain models and presentation logic shared by server and client

pub mod assets;
pub mod auth;
pub mod catalog;
#[cfg(feature = "ssr")]
pub mod config;
pub mod nav;
pub mod scroll_lock;
#[cfg(test)]
mod tests;
mod tour;

pub use auth::AuthView;
pub use catalog::{CatalogError, TourCatalog};
pub use tour::{Difficulty, Season, Tour};
