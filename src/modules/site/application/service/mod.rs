mod landing_service;

pub use landing_service::LandingService;
