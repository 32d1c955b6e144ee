pub mod landing;

pub use landing::{CategoryFilter, LandingData};
