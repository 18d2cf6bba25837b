pub mod error_boundary;
pub mod suspend_boundary;
pub mod navbar;
pub mod route_guard;
pub mod toast_surface;
pub mod page_header;
pub mod material_list;
pub mod selection_matrix;
