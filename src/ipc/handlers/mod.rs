pub mod admin;
pub mod core;
pub mod courses;
pub mod schedule;
pub mod selection;
