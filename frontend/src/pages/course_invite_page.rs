use common::user::Role;
use dioxus::prelude::*;
use gateway::api::courses;

use crate::api::api_handle::{use_api, use_api_resource};
use crate::components::page_header::PageHeader;
use crate::components::suspend_boundary::{EmptyState, LoadingIndicator};
use crate::data_definitions::session_state::use_session_state;
use crate::routes::Route;


/// Landing screen of an invitation link. Anyone may open it; only students
/// can join.
#[component]
pub fn CourseInvitePage(invite_code: String) -> Element {
    rsx! {
        Title { "Course invitation" }
        div {
            style: "max-width: 560px; margin: 0px auto; padding: 24px;",
            CourseInviteRoot { invite_code }
        }
    }
}

#[component]
fn CourseInviteRoot(invite_code: ReadSignal<String>) -> Element {
    let api = use_api();
    let session = use_session_state();
    let mut joining = use_signal(|| false);
    let info = use_api_resource("Could not read this invitation.", move |client| {
        let code = invite_code();
        async move { courses::invite_info(&client, &code).await }
    });

    let join = move |_| {
        let client = api.client();
        let code = invite_code();
        joining.set(true);
        spawn(async move {
            match courses::join_by_invite(&client, &code).await {
                Ok(joined) => {
                    api.toasts().success(joined.message.unwrap_or_else(|| "You joined the course.".to_string()));
                    navigator().replace(Route::CourseDetailPage { course_id: joined.course_id });
                }
                Err(e) => {
                    joining.set(false);
                    api.report_error(&e, "Could not join the course.");
                }
            }
        });
    };

    let info = info.read();
    let course = match &*info {
        None => return rsx! { LoadingIndicator {} },
        Some(Err(_)) => {
            return rsx! {
                EmptyState {
                    message: "This invitation link is not valid.",
                    Link { to: Route::MainPage {}, "Back to the main page" }
                }
            };
        }
        Some(Ok(info)) => info.course.clone(),
    };

    rsx! {
        PageHeader {
            title: "Course invitation",
            subtitle: "Do you want to join this course?",
            span { "Invitation" }
        }
        div {
            style: "background-color: white; border: 1px solid #DADDE3; border-radius: 10px; padding: 18px; margin-bottom: 18px;",
            div { style: "font-size: 20px; font-weight: bold;", "{course.course_name}" }
            div { style: "color: #5A6172;", "Prof. {course.professor_name}" }
        }
        match session.auth().role() {
            None => rsx! {
                p { "You need to log in before joining." }
                Link { to: Route::LoginPage {}, class: "course-button", "Log in" }
            },
            Some(Role::Student) => rsx! {
                button {
                    class: "course-button",
                    disabled: joining(),
                    onclick: join,
                    if joining() { "Joining..." } else { "Join course" }
                }
            },
            Some(Role::Professor) => rsx! {
                p { style: "color: #B45309;", "Professors cannot join a course." }
            },
        }
    }
}
