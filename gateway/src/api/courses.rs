//! Course listing, creation, invitations and week pages.

use common::{
    course::{CourseDetail, CourseList, CreateCourseRequest, CreateCourseResponse, InvitationCode, InviteInfo, JoinCourseResponse},
    material::{DeadlineRequest, MaterialSort, WeekMaterials},
    user::MessageResponse,
};

use crate::{client::{ApiClient, segment}, error::ApiError};


pub async fn list_courses(client: &ApiClient) -> Result<CourseList, ApiError> {
    client.get_json("/courses").await
}

pub async fn create_course(client: &ApiClient, request: &CreateCourseRequest) -> Result<CreateCourseResponse, ApiError> {
    client.post_json("/courses/create", request).await
}

pub async fn course_detail(client: &ApiClient, course_id: &str) -> Result<CourseDetail, ApiError> {
    client.get_json(&format!("/courses/{}", segment(course_id))).await
}

/// Professor only: issues (or re-issues) the course invitation code.
pub async fn create_invitation(client: &ApiClient, course_id: &str) -> Result<InvitationCode, ApiError> {
    client.post_empty(&format!("/courses/{}/invite", segment(course_id))).await
}

pub async fn invite_info(client: &ApiClient, code: &str) -> Result<InviteInfo, ApiError> {
    client.get_json(&format!("/courses/invite/{}", segment(code.trim()))).await
}

pub async fn join_by_invite(client: &ApiClient, code: &str) -> Result<JoinCourseResponse, ApiError> {
    client.post_empty(&format!("/courses/invite/{}/join", segment(code.trim()))).await
}

pub async fn week_materials(client: &ApiClient, course_id: &str, week: u32, sort: MaterialSort) -> Result<WeekMaterials, ApiError> {
    let path = format!("/courses/{}/week/{}", segment(course_id), week);
    client.get_json_with_query(&path, &[("sort", sort.as_query_value())]).await
}

pub async fn set_upload_deadline(client: &ApiClient, course_id: &str, week: u32, deadline: &str) -> Result<MessageResponse, ApiError> {
    let path = format!("/courses/{}/week/{}/deadline", segment(course_id), week);
    client.post_json(&path, &DeadlineRequest { deadline: deadline.to_string() }).await
}
