pub mod api_handle;
