mod create_experience;
mod delete_experience;
mod get_experience;
mod list_experiences;
mod update_experience;

pub use create_experience::{CreateExperienceError, CreateExperienceUseCase};
pub use delete_experience::{DeleteExperienceError, DeleteExperienceUseCase};
pub use get_experience::{GetExperienceError, GetExperienceUseCase};
pub use list_experiences::{ListExperiencesError, ListExperiencesUseCase};
pub use update_experience::{UpdateExperienceError, UpdateExperienceUseCase};
