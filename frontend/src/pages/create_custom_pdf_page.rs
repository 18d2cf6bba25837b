use common::page_selection::MatrixView;
use dioxus::prelude::*;
use gateway::api::custom_pdfs;

use crate::api::api_handle::use_api_resource;
use crate::components::error_boundary::ComponentErrorBoundary;
use crate::components::page_header::PageHeader;
use crate::components::selection_matrix::SelectionMatrixEditor;
use crate::components::suspend_boundary::{EmptyState, LoadingIndicator};
use crate::data_definitions::url_param::UrlParam;
use crate::routes::Route;


#[component]
pub fn CreateCustomPdfPage(course_id: String, week: u32, view: UrlParam<MatrixView>) -> Element {
    rsx! {
        Title { "Build my notes: week {week}" }
        CreateCustomPdfRoot { course_id, week, view: view.0 }
    }
}

#[component]
fn CreateCustomPdfRoot(course_id: ReadSignal<String>, week: ReadSignal<u32>, view: ReadSignal<MatrixView>) -> Element {
    let sources = use_api_resource("Could not load the source notes.", move |client| {
        let (course_id, week) = (course_id(), week());
        async move { custom_pdfs::custom_pdf_sources(&client, &course_id, week).await }
    });

    let (course, week_num) = (course_id(), week());
    let back = rsx! {
        Link { to: Route::WeekMaterialPage { course_id: course.clone(), week: week_num }, "Back to week {week_num}" }
    };

    match &*sources.read() {
        None => rsx! { LoadingIndicator {} },
        Some(Err(_)) => rsx! { EmptyState { message: "The source notes are unavailable.", {back} } },
        Some(Ok(sources)) if sources.materials.is_empty() => rsx! {
            EmptyState { message: "No student has shared notes for this week yet.", {back} }
        },
        Some(Ok(sources)) => rsx! {
            PageHeader {
                title: "Build my own notes",
                subtitle: format!("{} - week {} | pick the pages you like", sources.course.course_name, week_num),
                {back}
            }
            ComponentErrorBoundary {
                SelectionMatrixEditor {
                    key: "{course}-{week_num}",
                    sources: sources.clone(),
                    course_id,
                    week,
                    view,
                }
            }
        },
    }
}
