// src/web/mod.rs
pub mod auth_handlers;
pub mod faculty_handlers;
pub mod mw_auth;
pub mod routes;
pub mod session;
pub mod student_handlers;
