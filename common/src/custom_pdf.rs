//! Payloads for building and listing custom (composite) PDFs.

use serde::{Deserialize, Serialize};

use crate::course::Course;


/// One student's notes offered as a page source for a custom PDF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceDocument {
    pub material_id: String,
    pub uploader_name: String,
    pub page_count: u32,
    #[serde(default)]
    pub quality_score: Option<f64>,
    #[serde(default)]
    pub uploader_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPdfSources {
    pub course: Course,
    #[serde(default)]
    pub materials: Vec<SourceDocument>,
}

/// A single chosen page, in the wire shape of `generate-custom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSelection {
    pub material_id: String,
    pub page_num: u32,
    pub student_name: String,
}

impl PageSelection {
    pub fn matches(&self, material_id: &str, page_num: u32) -> bool {
        self.material_id == material_id && self.page_num == page_num
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateCustomRequest {
    pub selected_pages: Vec<PageSelection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateCustomResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub custom_pdf_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPdfPage {
    #[serde(default)]
    pub material_id: String,
    pub page_num: u32,
    #[serde(default)]
    pub source_student_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPdf {
    pub custom_pdf_id: String,
    #[serde(default)]
    pub course_id: String,
    #[serde(default)]
    pub course_name: Option<String>,
    #[serde(default)]
    pub week: u32,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub page_selections: Vec<CustomPdfPage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPdfList {
    #[serde(default)]
    pub custom_pdfs: Vec<CustomPdf>,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_request_serializes_in_wire_shape() {
        let request = GenerateCustomRequest {
            selected_pages: vec![PageSelection {
                material_id: "m1".to_string(),
                page_num: 2,
                student_name: "Hong".to_string(),
            }],
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"selected_pages":[{"material_id":"m1","page_num":2,"student_name":"Hong"}]}"#
        );
    }

    #[test]
    fn source_document_without_page_count_is_rejected() {
        let body = r#"{"material_id": "m1", "uploader_name": "Hong"}"#;
        assert!(serde_json::from_str::<SourceDocument>(body).is_err());
    }

    #[test]
    fn custom_pdf_list_parses_page_selections() {
        let body = r#"{"custom_pdfs": [{
            "custom_pdf_id": "cp1", "course_id": "c1", "course_name": "Databases", "week": 2,
            "file_name": "custom.pdf", "created_at": "2025-03-01T10:00:00",
            "page_selections": [{"material_id": "m1", "page_num": 3, "source_student_name": "Hong"}]
        }]}"#;
        let list: CustomPdfList = serde_json::from_str(body).unwrap();
        assert_eq!(list.custom_pdfs[0].page_selections[0].page_num, 3);
        assert_eq!(list.custom_pdfs[0].course_name.as_deref(), Some("Databases"));
    }
}
