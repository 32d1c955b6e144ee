pub mod form;
pub mod render;
pub mod resource;
pub mod resources;
pub mod routes;
