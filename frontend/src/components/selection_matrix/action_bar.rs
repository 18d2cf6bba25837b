use common::page_selection::MatrixView;
use dioxus::logger::tracing;
use dioxus::prelude::*;
use gateway::{ApiError, api::custom_pdfs};

use crate::api::api_handle::use_api;
use crate::data_definitions::browser_actions;
use crate::routes::Route;

use super::use_matrix_state;


/// Sticky bar with the selection count and the generate, clear, cancel and
/// view-switch actions.
#[component]
pub fn MatrixActionBar() -> Element {
    let state = use_matrix_state();
    let api = use_api();
    let mut generating = use_signal(|| false);
    let selected = state.matrix.read().selected_count();

    let generate = move |_| {
        if generating() {
            return;
        }
        let snapshot = state.matrix.peek().clone();
        if let Err(e) = snapshot.prepare_submission() {
            api.report_error(&ApiError::from(e), "");
            return;
        }
        let count = snapshot.selected_count();
        if !browser_actions::confirm(&format!("Generate a PDF from the {count} selected pages?")) {
            return;
        }

        let client = api.client();
        let course_id = state.course_id.peek().clone();
        let week = *state.week.peek();
        generating.set(true);
        spawn(async move {
            let result = custom_pdfs::generate_custom_pdf(&client, &course_id, week, &snapshot).await;
            generating.set(false);
            match result {
                Ok(response) => {
                    tracing::info!("custom pdf {:?} created from {count} pages", response.custom_pdf_id);
                    let message = if response.message.trim().is_empty() { "Your PDF is ready.".to_string() } else { response.message };
                    api.toasts().success(message);
                    let mut matrix = state.matrix;
                    matrix.write().clear_selection();
                    navigator().push(Route::MyCustomPdfsPage {});
                }
                // the selection stays as it was so the user can retry
                Err(e) => api.report_error(&e, "Could not generate the PDF."),
            }
        });
    };

    let clear = move |_| {
        let mut matrix = state.matrix;
        matrix.write().clear_selection();
    };

    let switch_view = move |_| {
        navigator().replace(Route::create_custom_pdf(state.course_id.read().clone(), *state.week.read(), state.view.read().toggled()));
    };

    let cancel = move |_| {
        navigator().push(Route::WeekMaterialPage { course_id: state.course_id.read().clone(), week: *state.week.read() });
    };

    let switch_label = match state.view.read().toggled() {
        MatrixView::Grid => "Grid view",
        MatrixView::Slider => "Slider view",
    };

    rsx! {
        div {
            id: "x-matrix-action-bar",
            style: "
                position: fixed;
                bottom: 0px;
                left: 0px;
                right: 0px;
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
                padding: 14px 32px;
                background-color: white;
                border-top: 1px solid #DADDE3;
                box-shadow: 0 -2px 10px 0 rgba(0, 0, 0, 0.08);
                z-index: 100;
            ",
            div {
                style: "flex-grow: 1; font-size: 16px;",
                "Selected pages: "
                strong { "{selected}" }
            }
            button { class: "course-button course-button-secondary", onclick: switch_view, "{switch_label}" }
            button { class: "course-button course-button-secondary", onclick: clear, "Clear selection" }
            button {
                class: "course-button",
                style: "background-color: #10B981; border-color: #10B981;",
                disabled: generating(),
                onclick: generate,
                if generating() { "Generating..." } else { "Generate my PDF" }
            }
            button { class: "course-button course-button-secondary", onclick: cancel, "Cancel" }
        }
    }
}
