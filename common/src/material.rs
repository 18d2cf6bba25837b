//! Uploaded course materials and the week listing payload.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::course::Course;


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub material_id: String,
    pub file_name: String,
    #[serde(default)]
    pub uploader_name: String,
    #[serde(default)]
    pub uploader_id: Option<String>,
    #[serde(default)]
    pub upload_date: String,
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub download_count: u64,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub quality_score: Option<f64>,
}

/// Ordering of the student notes list, sent as the `sort` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MaterialSort {
    #[default]
    Latest,
    Name,
    Popular,
    Downloads,
    Score,
}

impl MaterialSort {
    pub const ALL: [MaterialSort; 5] = [
        MaterialSort::Latest,
        MaterialSort::Name,
        MaterialSort::Popular,
        MaterialSort::Downloads,
        MaterialSort::Score,
    ];

    pub fn as_query_value(&self) -> &'static str {
        match self {
            MaterialSort::Latest => "latest",
            MaterialSort::Name => "name",
            MaterialSort::Popular => "popular",
            MaterialSort::Downloads => "downloads",
            MaterialSort::Score => "score",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MaterialSort::Latest => "Latest",
            MaterialSort::Name => "Name",
            MaterialSort::Popular => "Most viewed",
            MaterialSort::Downloads => "Most downloaded",
            MaterialSort::Score => "Quality score",
        }
    }
}

impl Display for MaterialSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_query_value())
    }
}

impl FromStr for MaterialSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MaterialSort::ALL
            .into_iter()
            .find(|sort| sort.as_query_value() == s)
            .ok_or_else(|| format!("unknown sort order: {s}"))
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekMaterials {
    pub course: Course,
    #[serde(default)]
    pub professor_materials: Vec<Material>,
    #[serde(default)]
    pub student_materials: Vec<Material>,
    #[serde(default)]
    pub upload_deadline: Option<String>,
    #[serde(default = "default_true")]
    pub can_upload: bool,
    #[serde(default = "default_true")]
    pub can_view: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeadlineRequest {
    pub deadline: String,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_query_values_parse_back() {
        for sort in MaterialSort::ALL {
            assert_eq!(sort.as_query_value().parse::<MaterialSort>(), Ok(sort));
        }
        assert!("oldest".parse::<MaterialSort>().is_err());
    }

    #[test]
    fn week_materials_defaults_to_open_upload_window() {
        let body = r#"{
            "course": {"course_id": "c1", "course_name": "Databases"},
            "student_materials": [{"material_id": "m1", "file_name": "a.pdf", "uploader_name": "Hong", "page_count": 4}]
        }"#;
        let week: WeekMaterials = serde_json::from_str(body).unwrap();
        assert!(week.can_upload);
        assert!(week.can_view);
        assert_eq!(week.upload_deadline, None);
        assert!(week.professor_materials.is_empty());
        assert_eq!(week.student_materials[0].page_count, 4);
    }

    #[test]
    fn closed_upload_window_is_kept() {
        let body = r#"{
            "course": {"course_id": "c1", "course_name": "Databases"},
            "upload_deadline": "2025-03-10T23:59",
            "can_upload": false,
            "can_view": true
        }"#;
        let week: WeekMaterials = serde_json::from_str(body).unwrap();
        assert!(!week.can_upload);
        assert_eq!(week.upload_deadline.as_deref(), Some("2025-03-10T23:59"));
    }
}
