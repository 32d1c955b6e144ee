pub mod api;
pub mod html;
pub mod list_editor;
pub mod listing;
pub mod patch;
pub mod validation;
