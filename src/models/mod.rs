// src/models/mod.rs
pub mod course;
pub mod registration;
pub mod user;
