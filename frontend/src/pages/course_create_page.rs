use common::validation::validate_course_form;
use dioxus::prelude::*;
use gateway::{ApiError, api::courses};

use crate::api::api_handle::use_api;
use crate::components::page_header::PageHeader;
use crate::routes::Route;


#[component]
pub fn CourseCreatePage() -> Element {
    let api = use_api();
    let mut course_name = use_signal(String::new);
    let mut year = use_signal(|| 2025_u32);
    let mut semester = use_signal(|| 1_u32);
    let mut submitting = use_signal(|| false);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let request = match validate_course_form(&course_name.read(), year(), semester()) {
            Ok(request) => request,
            Err(e) => return api.report_error(&ApiError::from(e), ""),
        };
        let client = api.client();
        submitting.set(true);
        spawn(async move {
            match courses::create_course(&client, &request).await {
                Ok(created) => {
                    api.toasts().success(created.message.unwrap_or_else(|| "Course created.".to_string()));
                    navigator().replace(Route::CourseDetailPage { course_id: created.course_id });
                }
                Err(e) => {
                    submitting.set(false);
                    api.report_error(&e, "Could not create the course.");
                }
            }
        });
    };

    rsx! {
        Title { "New course" }
        PageHeader {
            title: "New course",
            Link { to: Route::MainPage {}, "Home" }
        }
        form {
            style: "display: flex; flex-direction: column; gap: 12px; max-width: 480px;",
            onsubmit: submit,
            label { "Course name" }
            input {
                class: "course-input",
                value: "{course_name}",
                oninput: move |e| course_name.set(e.value()),
            }
            label { "Year" }
            input {
                class: "course-input",
                r#type: "number",
                value: "{year}",
                oninput: move |e| {
                    if let Ok(value) = e.value().parse() {
                        year.set(value);
                    }
                },
            }
            label { "Semester" }
            select {
                class: "course-input",
                value: "{semester}",
                onchange: move |e| semester.set(if e.value() == "2" { 2 } else { 1 }),
                option { value: "1", "1st semester" }
                option { value: "2", "2nd semester" }
            }
            div {
                style: "display: flex; flex-direction: row; gap: 10px;",
                button {
                    class: "course-button",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Creating..." } else { "Create course" }
                }
                button {
                    class: "course-button course-button-secondary",
                    r#type: "button",
                    onclick: move |_| { navigator().push(Route::MainPage {}); },
                    "Cancel"
                }
            }
        }
    }
}
