use dioxus::prelude::*;

use super::use_matrix_state;


/// Enlarged thumbnail overlay; a click anywhere outside the image closes it.
#[component]
pub fn PagePreview() -> Element {
    let state = use_matrix_state();
    let mut preview = state.preview;
    let Some(url) = preview() else {
        return rsx! {};
    };

    rsx! {
        div {
            style: "
                position: fixed;
                top: 0px;
                left: 0px;
                width: 100vw;
                height: 100vh;
                background: rgba(0, 0, 0, 0.7);
                z-index: 1500;
                display: flex;
                align-items: center;
                justify-content: center;
            ",
            onclick: move |_| preview.set(None),
            span {
                style: "position: absolute; top: 16px; right: 28px; color: white; font-size: 36px; cursor: pointer;",
                "×"
            }
            img {
                src: "{url}",
                alt: "Page preview",
                style: "max-width: 90vw; max-height: 90vh; background-color: white; border-radius: 6px;",
                onclick: move |e| e.stop_propagation(),
            }
        }
    }
}
