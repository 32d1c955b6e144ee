pub mod entities;

pub use entities::{current_first, Experience, ExperienceInput, ExperiencePatch};
