//! Custom PDF sources, generation and downloads.

use common::{
    custom_pdf::{CustomPdfList, CustomPdfSources, GenerateCustomResponse},
    page_selection::SelectionMatrix,
};

use crate::{client::{ApiClient, DownloadedFile, segment}, error::ApiError};


pub async fn custom_pdf_sources(client: &ApiClient, course_id: &str, week: u32) -> Result<CustomPdfSources, ApiError> {
    client.get_json(&format!("/courses/{}/week/{}/create-custom", segment(course_id), week)).await
}

/// Sends the current selection, in order, to be merged by the backend.
///
/// An empty selection fails with [`ApiError::Validation`] before anything is
/// sent. A `success: false` answer becomes [`ApiError::Rejected`] carrying the
/// backend's message. The matrix is only borrowed: on any error the caller
/// still holds the full selection.
pub async fn generate_custom_pdf(client: &ApiClient, course_id: &str, week: u32, matrix: &SelectionMatrix) -> Result<GenerateCustomResponse, ApiError> {
    let request = matrix.prepare_submission()?;
    tracing::info!("requesting custom pdf with {} pages", request.selected_pages.len());
    let path = format!("/courses/{}/week/{}/generate-custom", segment(course_id), week);
    let response: GenerateCustomResponse = client.post_json(&path, &request).await?;
    if !response.success {
        return Err(ApiError::Rejected { message: response.message });
    }
    Ok(response)
}

pub async fn my_custom_pdfs(client: &ApiClient) -> Result<CustomPdfList, ApiError> {
    client.get_json("/custom-pdfs/my-list").await
}

pub async fn download_custom_pdf(client: &ApiClient, custom_pdf_id: &str) -> Result<DownloadedFile, ApiError> {
    client.get_bytes(&format!("/custom-pdfs/{}/download", segment(custom_pdf_id))).await
}
