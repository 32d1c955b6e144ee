pub mod admin;
pub mod auth;
pub mod certificate;
pub mod experience;
pub mod profile;
pub mod project;
pub mod site;
pub mod skill;
