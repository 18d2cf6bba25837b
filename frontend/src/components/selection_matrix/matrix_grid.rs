use dioxus::prelude::*;

use super::{page_cell::PageCell, use_matrix_state};


/// Documents as rows, page numbers as columns.
#[component]
pub fn MatrixGrid() -> Element {
    let state = use_matrix_state();
    let matrix = state.matrix.read();
    let documents = matrix.documents().to_vec();
    let columns = matrix.max_page_count();
    drop(matrix);

    rsx! {
        div {
            style: "overflow-x: auto; background-color: white; border: 1px solid #DADDE3; border-radius: 8px;",
            table {
                style: "border-collapse: collapse;",
                thead {
                    tr {
                        th { style: "padding: 10px; text-align: left; min-width: 140px;", "Student" }
                        for page in 1..=columns {
                            th { key: "{page}", style: "padding: 10px;", "Page {page}" }
                        }
                    }
                }
                tbody {
                    for doc in documents {
                        tr {
                            key: "{doc.material_id}",
                            style: "border-top: 1px solid #EEF0F3;",
                            td {
                                style: "padding: 10px; vertical-align: top;",
                                div { style: "font-weight: bold;", "{doc.uploader_name}" }
                                if let Some(uploader_id) = doc.uploader_id.clone() {
                                    div { style: "font-size: 13px; color: #5A6172;", "({uploader_id})" }
                                }
                                if let Some(score) = doc.quality_score {
                                    div { style: "font-size: 13px; color: #5A6172;", "score {score:.1}" }
                                }
                            }
                            for page in 1..=columns {
                                td {
                                    key: "{page}",
                                    style: "padding: 6px; vertical-align: top;",
                                    PageCell {
                                        material_id: doc.material_id.clone(),
                                        page_num: page,
                                        student_name: doc.uploader_name.clone(),
                                        large: false,
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
