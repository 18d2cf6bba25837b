//! Interactive page-selection matrix for composing a custom PDF.
//!
//! [`SelectionMatrixEditor`] owns the [`SelectionMatrix`] for one course
//! week and shares it with the grid, slider, action bar and preview overlay
//! through [`MatrixState`]. The grid and the slider are two renderings of
//! the same selection and toggle it through the same handler.

pub mod action_bar;
pub mod matrix_grid;
pub mod matrix_slider;
pub mod page_cell;
pub mod page_preview;

use common::{
    custom_pdf::CustomPdfSources,
    page_selection::{MatrixView, SelectionMatrix},
};
use dioxus::logger::tracing;
use dioxus::prelude::*;

use self::{action_bar::MatrixActionBar, matrix_grid::MatrixGrid, matrix_slider::MatrixSlider, page_preview::PagePreview};


#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixState {
    pub matrix: Signal<SelectionMatrix>,
    /// Thumbnail URL shown enlarged, if any.
    pub preview: Signal<Option<String>>,
    pub course_id: ReadSignal<String>,
    pub week: ReadSignal<u32>,
    pub view: ReadSignal<MatrixView>,
}

impl MatrixState {
    pub fn toggle(&self, material_id: &str, page_num: u32, student_name: &str) {
        let mut matrix = self.matrix;
        let outcome = matrix.write().toggle_page(material_id, page_num, student_name);
        tracing::debug!("toggle {material_id} p{page_num}: {outcome:?}");
    }
}

pub fn use_matrix_state() -> MatrixState {
    use_context::<MatrixState>()
}

#[component]
pub fn SelectionMatrixEditor(
    sources: ReadSignal<CustomPdfSources>,
    course_id: ReadSignal<String>,
    week: ReadSignal<u32>,
    view: ReadSignal<MatrixView>,
) -> Element {
    let matrix = use_signal(|| SelectionMatrix::new(sources.peek().materials.clone()));
    let preview = use_signal(|| None::<String>);
    use_context_provider(|| MatrixState { matrix, preview, course_id, week, view });

    rsx! {
        div {
            id: "x-selection-matrix-editor",
            style: "display: flex; flex-direction: column; gap: 16px; padding-bottom: 90px;",
            div {
                style: "
                    background-color: #EFF6FF;
                    border: 1px solid #BFDBFE;
                    border-radius: 8px;
                    padding: 12px 16px;
                    line-height: 1.6;
                ",
                strong { "How it works" }
                br {}
                "1. Click pages in any student's notes to select them."
                br {}
                "2. Selected pages are merged into one PDF in the order you clicked them."
                br {}
                "3. Click a thumbnail to see it enlarged."
            }
            match view() {
                MatrixView::Grid => rsx! { MatrixGrid {} },
                MatrixView::Slider => rsx! { MatrixSlider {} },
            }
            MatrixActionBar {}
            PagePreview {}
        }
    }
}
