//! Client for the Google Places API v1 text search.

pub mod client;
pub mod error;
pub mod types;

pub use client::{PlacesClient, PlacesConfig};
pub use error::PlacesError;
pub use types::RawPlace;
