pub mod login_page;
pub mod signup_page;
pub mod main_page;
pub mod course_create_page;
pub mod course_detail_page;
pub mod course_invite_page;
pub mod week_material_page;
pub mod create_custom_pdf_page;
pub mod my_custom_pdfs_page;
pub mod notifications_page;
pub mod not_found_page;
