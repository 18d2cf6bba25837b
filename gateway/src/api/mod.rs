//! Endpoint functions, one module per backend resource.

pub mod auth;
pub mod courses;
pub mod materials;
pub mod custom_pdfs;
pub mod notifications;
