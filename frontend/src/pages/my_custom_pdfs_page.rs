use common::{custom_pdf::CustomPdf, file_name::custom_pdf_base_name};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_file_icons::MdFileDownload;
use gateway::api::custom_pdfs;

use crate::api::api_handle::{use_api, use_api_resource};
use crate::components::page_header::PageHeader;
use crate::components::suspend_boundary::{EmptyState, LoadingIndicator};
use crate::data_definitions::{browser_storage, object_url};
use crate::routes::Route;


#[component]
pub fn MyCustomPdfsPage() -> Element {
    let list = use_api_resource("Could not load your custom PDFs.", move |client| async move {
        custom_pdfs::my_custom_pdfs(&client).await
    });

    rsx! {
        Title { "My custom PDFs" }
        PageHeader {
            title: "My custom PDFs",
            subtitle: "PDFs you assembled from your classmates' notes",
            Link { to: Route::MainPage {}, "Home" }
        }
        match &*list.read() {
            None => rsx! { LoadingIndicator {} },
            Some(Ok(list)) if !list.custom_pdfs.is_empty() => rsx! {
                div {
                    style: "display: flex; flex-direction: column; gap: 14px;",
                    for pdf in list.custom_pdfs.iter().cloned() {
                        CustomPdfCard { key: "{pdf.custom_pdf_id}", pdf: pdf.clone() }
                    }
                }
            },
            Some(_) => rsx! {
                EmptyState {
                    message: "You have not built any custom notes yet. Combine your classmates' notes from a course week.",
                    Link { to: Route::MainPage {}, class: "course-button", "Go to my courses" }
                }
            },
        }
    }
}

#[component]
fn CustomPdfCard(pdf: ReadSignal<CustomPdf>) -> Element {
    let api = use_api();
    let mut downloading = use_signal(|| false);

    let download = move |_| {
        let CustomPdf { custom_pdf_id, course_name, week, .. } = pdf.read().clone();
        let client = api.client();
        downloading.set(true);
        spawn(async move {
            match custom_pdfs::download_custom_pdf(&client, &custom_pdf_id).await {
                Ok(file) => {
                    let name = file.file_name.clone().unwrap_or_else(|| {
                        browser_storage::download_history().unique_file_name(&custom_pdf_base_name(course_name.as_deref(), week))
                    });
                    match object_url::save_file(&file, &name) {
                        Ok(()) => {
                            browser_storage::record_download(&name, Some(file.bytes.len() as u64));
                            api.toasts().success("Download complete.");
                        }
                        Err(e) => api.toasts().danger(format!("Download failed: {e}")),
                    }
                }
                Err(e) => api.report_error(&e, "Download failed."),
            }
            downloading.set(false);
        });
    };

    let pdf = pdf.read().clone();
    let course_name = pdf.course_name.clone().unwrap_or_default();
    rsx! {
        div {
            style: "
                background-color: white;
                border: 1px solid #DADDE3;
                border-radius: 10px;
                padding: 18px;
                display: flex;
                flex-direction: column;
                gap: 10px;
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                div {
                    style: "flex-grow: 1;",
                    div { style: "font-size: 17px; font-weight: bold;", "{pdf.file_name}" }
                    div { style: "color: #5A6172; font-size: 14px;", "{course_name} - week {pdf.week} | {pdf.created_at}" }
                }
                button {
                    class: "course-button",
                    disabled: downloading(),
                    onclick: download,
                    Icon { icon: MdFileDownload, style: "width: 16px; height: 16px;" }
                    if downloading() { " Downloading..." } else { " Download" }
                }
            }
            div {
                style: "background-color: #F5F7FB; border-radius: 6px; padding: 10px; max-height: 150px; overflow-y: auto; font-size: 14px;",
                div { style: "font-weight: bold; margin-bottom: 4px;", "Selected pages ({pdf.page_selections.len()})" }
                for (index, page) in pdf.page_selections.iter().enumerate() {
                    div { key: "{index}", "{index + 1}. {page.source_student_name}, page {page.page_num}" }
                }
            }
        }
    }
}
