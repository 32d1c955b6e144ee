pub mod entities;

pub use entities::{Project, ProjectCategory, ProjectInput, ProjectPatch};
