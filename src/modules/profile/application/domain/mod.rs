pub mod entities;

pub use entities::{Education, Profile, ProfileInput, ProfilePatch, ProfileStats, SocialLinks};
