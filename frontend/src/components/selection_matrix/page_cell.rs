use dioxus::prelude::*;

use crate::api::api_handle::use_api;
use crate::data_definitions::feature_config::use_feature_config;

use super::use_matrix_state;


/// One page of one source document. Clicking the cell toggles the page;
/// clicking the thumbnail only previews it.
#[component]
pub fn PageCell(material_id: String, page_num: u32, student_name: String, large: bool) -> Element {
    let state = use_matrix_state();
    let api = use_api();
    let features = use_feature_config();

    let matrix = state.matrix.read();
    if !matrix.has_page(&material_id, page_num) {
        return rsx! { MissingPageCell { large } };
    }
    let selected = matrix.is_selected(&material_id, page_num);
    let order = matrix.order_of(&material_id, page_num);
    drop(matrix);

    let thumbnail = api.thumbnail_url(&material_id, page_num);
    let preview_url = thumbnail.clone();
    let border = if selected { "3px solid #10B981" } else { "1px solid #DADDE3" };
    let background = if selected { "#ECFDF5" } else { "white" };
    let width = if large { 360 } else { 120 };

    rsx! {
        div {
            class: "course-hover-shadow",
            style: "
                position: relative;
                width: {width}px;
                border: {border};
                border-radius: 6px;
                background-color: {background};
                padding: 6px;
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 4px;
                user-select: none;
            ",
            onclick: move |_| state.toggle(&material_id, page_num, &student_name),
            input {
                r#type: "checkbox",
                checked: selected,
                style: "position: absolute; top: 6px; left: 6px; pointer-events: none;",
                readonly: true,
            }
            if let Some(order) = order {
                span {
                    style: "
                        position: absolute;
                        top: 4px;
                        right: 4px;
                        background-color: #10B981;
                        color: white;
                        border-radius: 10px;
                        padding: 0px 7px;
                        font-size: 12px;
                    ",
                    "#{order}"
                }
            }
            if features.page_thumbnails {
                img {
                    src: "{thumbnail}",
                    alt: "Page {page_num}",
                    style: "width: 100%; border-radius: 4px; cursor: zoom-in;",
                    onclick: move |e| {
                        e.stop_propagation();
                        let mut preview = state.preview;
                        preview.set(Some(preview_url.clone()));
                    },
                }
            }
            span { style: "font-size: 13px; color: #5A6172;", "{page_num}" }
        }
    }
}

#[component]
fn MissingPageCell(large: bool) -> Element {
    let width = if large { 360 } else { 120 };
    rsx! {
        div {
            style: "width: {width}px; color: #C4C7CE; text-align: center; padding: 20px 0px;",
            title: "This document has no page here",
            "-"
        }
    }
}
