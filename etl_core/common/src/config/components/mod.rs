pub mod api;
pub mod connections;
pub mod global;
pub mod project;
