//! Material rows with view and download actions.

use common::material::Material;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdVisibility;
use dioxus_free_icons::icons::md_file_icons::MdFileDownload;
use gateway::api::materials;

use crate::api::api_handle::use_api;
use crate::components::suspend_boundary::EmptyState;
use crate::data_definitions::{browser_storage, object_url};


#[component]
pub fn MaterialList(materials: Vec<Material>, show_stats: bool, empty_message: String) -> Element {
    if materials.is_empty() {
        return rsx! { EmptyState { message: empty_message } };
    }
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 10px;",
            for material in materials {
                MaterialRow { key: "{material.material_id}", material: material.clone(), show_stats }
            }
        }
    }
}

#[component]
fn MaterialRow(material: ReadSignal<Material>, show_stats: bool) -> Element {
    let api = use_api();
    let mut busy = use_signal(|| false);

    let view = move |_| {
        let material_id = material.read().material_id.clone();
        let client = api.client();
        busy.set(true);
        spawn(async move {
            match materials::view_material(&client, &material_id).await {
                Ok(file) => {
                    if let Err(e) = object_url::open_in_new_tab(&file) {
                        api.toasts().danger(format!("Could not open the file: {e}"));
                    }
                }
                Err(e) => api.report_error(&e, "Could not open the file."),
            }
            busy.set(false);
        });
    };

    let download = move |_| {
        let Material { material_id, file_name, .. } = material.read().clone();
        let client = api.client();
        busy.set(true);
        spawn(async move {
            match materials::download_material(&client, &material_id).await {
                Ok(file) => {
                    let name = file
                        .file_name
                        .clone()
                        .unwrap_or_else(|| browser_storage::download_history().unique_file_name_or(&file_name, &material_id));
                    match object_url::save_file(&file, &name) {
                        Ok(()) => browser_storage::record_download(&name, Some(file.bytes.len() as u64)),
                        Err(e) => api.toasts().danger(format!("Download failed: {e}")),
                    }
                }
                Err(e) => api.report_error(&e, "Download failed."),
            }
            busy.set(false);
        });
    };

    let m = material.read().clone();
    rsx! {
        div {
            class: "course-hover-shadow",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 16px;
                padding: 14px 18px;
                background-color: white;
                border: 1px solid #DADDE3;
                border-radius: 8px;
            ",
            div {
                style: "flex-grow: 1; display: flex; flex-direction: column; gap: 4px;",
                div { style: "font-weight: bold;", "{m.file_name}" }
                div {
                    style: "font-size: 13px; color: #5A6172;",
                    "{m.uploader_name} | {m.upload_date} | {m.page_count} pages | {m.download_count} downloads"
                    if show_stats {
                        " | {m.view_count} views"
                        if let Some(score) = m.quality_score {
                            " | score {score:.1}"
                        }
                    }
                }
            }
            button {
                class: "course-button course-button-secondary",
                disabled: busy(),
                onclick: view,
                Icon { icon: MdVisibility, style: "width: 16px; height: 16px;" }
                " View"
            }
            button {
                class: "course-button",
                disabled: busy(),
                onclick: download,
                Icon { icon: MdFileDownload, style: "width: 16px; height: 16px;" }
                " Download"
            }
        }
    }
}
