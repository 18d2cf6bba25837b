use common::course::{CourseDetail, WeekSummary};
use dioxus::logger::tracing;
use dioxus::prelude::*;
use gateway::api::courses;

use crate::api::api_handle::{use_api, use_api_resource};
use crate::components::page_header::PageHeader;
use crate::components::suspend_boundary::{EmptyState, LoadingIndicator};
use crate::data_definitions::browser_actions;
use crate::data_definitions::feature_config::use_feature_config;
use crate::data_definitions::session_state::use_session_state;
use crate::routes::Route;


#[component]
pub fn CourseDetailPage(course_id: String) -> Element {
    rsx! {
        CourseDetailRoot { course_id }
    }
}

#[component]
fn CourseDetailRoot(course_id: ReadSignal<String>) -> Element {
    let detail = use_api_resource("Could not load the course.", move |client| {
        let course_id = course_id();
        async move { courses::course_detail(&client, &course_id).await }
    });

    match &*detail.read() {
        None => rsx! { LoadingIndicator {} },
        Some(Err(_)) => rsx! {
            EmptyState {
                message: "This course could not be found.",
                Link { to: Route::MainPage {}, "Back to my courses" }
            }
        },
        Some(Ok(detail)) => rsx! { CourseDetailView { detail: detail.clone() } },
    }
}

#[component]
fn CourseDetailView(detail: CourseDetail) -> Element {
    let session = use_session_state();
    let features = use_feature_config();
    let is_professor = session.session().is_some_and(|s| s.is_professor());
    let course = &detail.course;

    let subtitle = if is_professor {
        format!("{}, semester {} | {} students", course.year, course.semester, course.enrolled_count())
    } else {
        format!("{}, semester {} | Prof. {}", course.year, course.semester, course.professor_name)
    };

    rsx! {
        Title { "{course.course_name}" }
        PageHeader {
            title: course.course_name.clone(),
            subtitle,
            Link { to: Route::MainPage {}, "Home" }
        }
        if is_professor && features.invite_codes {
            InvitationPanel { course_id: course.course_id.clone() }
        }
        h2 { "Weekly material" }
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 14px;",
            for week in detail.weeks_data.iter().cloned() {
                WeekCard { key: "{week.week}", course_id: course.course_id.clone(), week: week.clone() }
            }
        }
    }
}

#[component]
fn WeekCard(course_id: String, week: WeekSummary) -> Element {
    let week_num = week.week;
    rsx! {
        div {
            class: "course-hover-shadow",
            style: "
                background-color: white;
                border: 1px solid #DADDE3;
                border-radius: 10px;
                padding: 16px;
                display: flex;
                flex-direction: column;
                gap: 6px;
            ",
            onclick: move |_| { navigator().push(Route::WeekMaterialPage { course_id: course_id.clone(), week: week_num }); },
            div { style: "font-size: 18px; font-weight: bold;", "Week {week.week}" }
            div { "Professor material: " strong { "{week.professor_count}" } }
            div { "Student notes: " strong { "{week.student_count}" } }
            div {
                style: "border-top: 1px solid #EEF0F3; padding-top: 6px; color: #5A6172;",
                "{week.total_views} views | {week.total_downloads} downloads"
            }
        }
    }
}

/// Issues an invitation code and the matching join link.
#[component]
fn InvitationPanel(course_id: ReadSignal<String>) -> Element {
    let api = use_api();
    let mut code = use_signal(|| None::<String>);
    let mut issuing = use_signal(|| false);

    let issue = move |_| {
        let client = api.client();
        let course_id = course_id();
        issuing.set(true);
        spawn(async move {
            match courses::create_invitation(&client, &course_id).await {
                Ok(invitation) => code.set(Some(invitation.invitation_code)),
                Err(e) => api.report_error(&e, "Could not create an invitation code."),
            }
            issuing.set(false);
        });
    };

    let link = code().map(|c| format!("{}/invite/{}", browser_actions::page_origin(), c));
    let copy = move |_| {
        let Some(link) = code().map(|c| format!("{}/invite/{}", browser_actions::page_origin(), c)) else {
            return;
        };
        spawn(async move {
            match browser_actions::copy_to_clipboard(&link).await {
                Ok(()) => api.toasts().info("Invitation link copied."),
                Err(e) => {
                    tracing::warn!("copy failed: {e:#}");
                    api.toasts().warning("Could not copy the link; copy it by hand.");
                }
            }
        });
    };

    rsx! {
        div {
            style: "
                background-color: white;
                border: 1px solid #DADDE3;
                border-radius: 10px;
                padding: 16px;
                margin-bottom: 20px;
                display: flex;
                flex-direction: column;
                gap: 10px;
            ",
            div { style: "font-weight: bold;", "Invite students" }
            if let (Some(code), Some(link)) = (code(), link) {
                div { "Code: " strong { "{code}" } }
                div {
                    style: "display: flex; flex-direction: row; gap: 10px; align-items: center;",
                    input { class: "course-input", readonly: true, value: "{link}" }
                    button { class: "course-button course-button-secondary", onclick: copy, "Copy link" }
                }
            }
            button {
                class: "course-button",
                style: "width: fit-content;",
                disabled: issuing(),
                onclick: issue,
                if code().is_some() { "Issue a new code" } else { "Create invitation code" }
            }
        }
    }
}
