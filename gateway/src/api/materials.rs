//! Material upload, view and download.

use common::user::MessageResponse;
use reqwest::multipart::{Form, Part};

use crate::{client::{ApiClient, DownloadedFile, segment}, error::ApiError};


pub async fn upload_material(client: &ApiClient, course_id: &str, week: u32, file_name: &str, bytes: Vec<u8>) -> Result<MessageResponse, ApiError> {
    let part = Part::bytes(bytes)
        .file_name(file_name.to_string())
        .mime_str("application/pdf")
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let form = Form::new().part("file", part);
    let path = format!("/courses/{}/week/{}/upload", segment(course_id), week);
    client.post_multipart(&path, form).await
}

pub async fn view_material(client: &ApiClient, material_id: &str) -> Result<DownloadedFile, ApiError> {
    client.get_bytes(&format!("/materials/{}/view", segment(material_id))).await
}

pub async fn download_material(client: &ApiClient, material_id: &str) -> Result<DownloadedFile, ApiError> {
    client.get_bytes(&format!("/materials/{}/download", segment(material_id))).await
}
