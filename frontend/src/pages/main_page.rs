use common::course::Course;
use dioxus::prelude::*;
use gateway::api::courses;

use crate::api::api_handle::use_api_resource;
use crate::components::page_header::PageHeader;
use crate::components::suspend_boundary::{EmptyState, LoadingIndicator};
use crate::data_definitions::session_state::use_session_state;
use crate::routes::Route;


/// Course list: enrolled courses for students, taught courses for professors.
#[component]
pub fn MainPage() -> Element {
    let session = use_session_state();
    let course_list = use_api_resource("Could not load your courses.", move |client| async move {
        courses::list_courses(&client).await
    });
    let Some(user) = session.session() else {
        return rsx! { LoadingIndicator {} };
    };
    let is_professor = user.is_professor();

    let (intro, heading, empty) = if is_professor {
        ("Manage your courses and share lecture material.", "Courses you teach", "You are not teaching any course yet.")
    } else {
        ("Browse course material and build your own notes.", "Your courses", "You are not enrolled in any course yet.")
    };

    rsx! {
        Title { "My courses" }
        PageHeader {
            title: format!("Hello, {}!", user.name),
            subtitle: intro.to_string(),
            span { "Home" }
        }
        div {
            style: "display: flex; flex-direction: row; align-items: center; margin-bottom: 16px;",
            h2 { style: "flex-grow: 1; margin: 0px;", "{heading}" }
            if is_professor {
                button {
                    class: "course-button",
                    onclick: move |_| { navigator().push(Route::CourseCreatePage {}); },
                    "+ New course"
                }
            }
        }
        match &*course_list.read() {
            None => rsx! { LoadingIndicator {} },
            Some(Err(_)) => rsx! { EmptyState { message: "Courses are unavailable right now." } },
            Some(Ok(list)) if list.courses.is_empty() => rsx! {
                EmptyState { message: empty.to_string() }
            },
            Some(Ok(list)) => rsx! {
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 16px;",
                    for course in list.courses.iter().cloned() {
                        CourseCard { key: "{course.course_id}", course: course.clone(), is_professor }
                    }
                }
            },
        }
    }
}

#[component]
fn CourseCard(course: Course, is_professor: bool) -> Element {
    let course_id = course.course_id.clone();
    rsx! {
        div {
            class: "course-hover-shadow",
            style: "
                background-color: white;
                border: 1px solid #DADDE3;
                border-radius: 10px;
                padding: 18px;
                display: flex;
                flex-direction: column;
                gap: 8px;
            ",
            onclick: move |_| { navigator().push(Route::CourseDetailPage { course_id: course_id.clone() }); },
            div { style: "font-size: 18px; font-weight: bold;", "{course.course_name}" }
            div { style: "color: #5A6172;", "{course.year}, semester {course.semester}" }
            if is_professor {
                div { style: "color: #2F4A8A;", "{course.enrolled_count()} students enrolled" }
            } else {
                div { style: "color: #5A6172;", "Prof. {course.professor_name}" }
                div { style: "color: #2F4A8A;", "Enter course →" }
            }
        }
    }
}
