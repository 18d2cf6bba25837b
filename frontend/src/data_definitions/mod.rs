pub mod url_param;
pub mod feature_config;
pub mod browser_storage;
pub mod session_state;
pub mod toast_service;
pub mod object_url;
pub mod browser_actions;
