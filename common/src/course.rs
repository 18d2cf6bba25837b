//! Course, week summary and invitation payloads.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub course_id: String,
    pub course_name: String,
    #[serde(default)]
    pub year: u32,
    #[serde(default)]
    pub semester: u32,
    #[serde(default)]
    pub professor_id: Option<String>,
    #[serde(default)]
    pub professor_name: String,
    #[serde(default)]
    pub enrolled_students: Vec<String>,
}

impl Course {
    pub fn enrolled_count(&self) -> usize {
        self.enrolled_students.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseList {
    #[serde(default)]
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSummary {
    pub week: u32,
    #[serde(default)]
    pub professor_count: u64,
    #[serde(default)]
    pub student_count: u64,
    #[serde(default)]
    pub total_downloads: u64,
    #[serde(default)]
    pub total_views: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDetail {
    pub course: Course,
    #[serde(default)]
    pub weeks_data: Vec<WeekSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCourseRequest {
    pub course_name: String,
    pub year: u32,
    pub semester: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCourseResponse {
    pub course_id: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvitationCode {
    pub invitation_code: String,
}

/// Course preview shown on the invitation landing screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InviteInfo {
    pub course: Course,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinCourseResponse {
    pub course_id: String,
    #[serde(default)]
    pub message: Option<String>,
}
