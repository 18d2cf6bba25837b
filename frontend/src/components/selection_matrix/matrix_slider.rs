use common::page_selection::{MatrixCursor, SelectionMatrix};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::{MdChevronLeft, MdChevronRight, MdExpandLess, MdExpandMore};

use super::{page_cell::PageCell, use_matrix_state};


/// One page of one document at a time, with page and document cursors.
#[component]
pub fn MatrixSlider() -> Element {
    let state = use_matrix_state();
    let cursor = use_signal(MatrixCursor::default);

    let matrix = state.matrix.read();
    let current = cursor().clamped(&matrix);
    let document = matrix.document(current.document()).cloned();
    let document_count = matrix.documents().len();
    let max_page = matrix.max_page_count();
    let can_prev_page = current.can_prev_page();
    let can_next_page = current.can_next_page(&matrix);
    let can_prev_document = current.can_prev_document();
    let can_next_document = current.can_next_document(&matrix);
    drop(matrix);

    let Some(document) = document else {
        return rsx! {};
    };

    let step = move |f: fn(MatrixCursor, &SelectionMatrix) -> MatrixCursor| {
        let mut cursor = cursor;
        let next = f(cursor(), &state.matrix.read());
        cursor.set(next);
    };

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 14px;
                padding: 20px;
                background-color: white;
                border: 1px solid #DADDE3;
                border-radius: 8px;
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                button {
                    class: "course-button course-button-secondary",
                    disabled: !can_prev_document,
                    onclick: move |_| step(MatrixCursor::prev_document),
                    Icon { icon: MdExpandLess, style: "width: 18px; height: 18px;" }
                }
                div {
                    style: "min-width: 220px; text-align: center;",
                    div { style: "font-weight: bold;", "{document.uploader_name}" }
                    div { style: "font-size: 13px; color: #5A6172;", "Student {current.document() + 1} of {document_count}" }
                }
                button {
                    class: "course-button course-button-secondary",
                    disabled: !can_next_document,
                    onclick: move |_| step(MatrixCursor::next_document),
                    Icon { icon: MdExpandMore, style: "width: 18px; height: 18px;" }
                }
            }
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 16px;",
                button {
                    class: "course-button course-button-secondary",
                    disabled: !can_prev_page,
                    onclick: move |_| step(MatrixCursor::prev_page),
                    Icon { icon: MdChevronLeft, style: "width: 22px; height: 22px;" }
                }
                PageCell {
                    key: "{document.material_id}-{current.page()}",
                    material_id: document.material_id.clone(),
                    page_num: current.page(),
                    student_name: document.uploader_name.clone(),
                    large: true,
                }
                button {
                    class: "course-button course-button-secondary",
                    disabled: !can_next_page,
                    onclick: move |_| step(MatrixCursor::next_page),
                    Icon { icon: MdChevronRight, style: "width: 22px; height: 22px;" }
                }
            }
            div { style: "color: #5A6172;", "Page {current.page()} of {max_page}" }
        }
    }
}
