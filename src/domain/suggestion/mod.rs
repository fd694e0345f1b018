pub mod errors;
pub mod repository;
pub mod value_objects;
