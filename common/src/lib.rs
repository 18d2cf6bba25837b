//! Common library exports shared between the gateway and the frontend.

extern crate serde;


pub mod user;
pub mod course;
pub mod material;
pub mod custom_pdf;
pub mod notification;
pub mod page_selection;
pub mod route_guard;
pub mod toast;
pub mod file_name;
pub mod validation;
