mod load_landing;

pub use load_landing::{LandingError, LoadLandingUseCase};
