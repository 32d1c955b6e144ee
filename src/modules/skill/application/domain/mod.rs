pub mod entities;

pub use entities::{SkillCategory, SkillCategoryInput, SkillCategoryPatch, SkillEntry};
