//! Renders live toasts in the top-right corner.

use common::toast::Toast;
use dioxus::prelude::*;

use crate::data_definitions::toast_service::use_toasts;


#[component]
pub fn ToastSurface() -> Element {
    let toasts = use_toasts();

    rsx! {
        div {
            id: "x-toast-surface",
            style: "
                position: fixed;
                top: 16px;
                right: 16px;
                z-index: 2000;
                display: flex;
                flex-direction: column;
                gap: 8px;
                max-width: 380px;
            ",
            for toast in toasts.live() {
                ToastCard { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastCard(toast: Toast) -> Element {
    let toasts = use_toasts();
    let (background, accent) = toast.severity.colors();
    let id = toast.id;

    rsx! {
        div {
            style: "
                background-color: {background};
                border: 1px solid {accent};
                border-left: 6px solid {accent};
                border-radius: 6px;
                padding: 10px 14px;
                box-shadow: 0 2px 10px 0 rgba(0, 0, 0, 0.15);
                display: flex;
                flex-direction: row;
                gap: 10px;
                align-items: flex-start;
            ",
            span { style: "flex-grow: 1;", "{toast.message}" }
            button {
                style: "border: none; background: none; cursor: pointer; font-size: 16px;",
                onclick: move |_| toasts.dismiss(id),
                "×"
            }
        }
    }
}
