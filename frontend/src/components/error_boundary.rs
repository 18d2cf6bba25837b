//! Error boundaries for render failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                rsx! {
                    div {
                        style: "padding: 24px; display: flex; flex-direction: column; gap: 12px;",
                        h1 {
                            style: "color: #B91C1C; font-size: 34px; margin: 0px;",
                            "Something broke on this screen",
                        }
                        p {
                            style: "color: #7F1D1D; font-size: 16px; margin: 0px;",
                            "Section: {boundary_name}"
                        }
                        a {
                            href: "/",
                            class: "course-button",
                            style: "width: fit-content; text-decoration: none;",
                            "Back to my courses"
                        }
                        pre {
                            style: "color: black; border: 1px solid #EF4444; padding: 10px; border-radius: 5px; text-wrap: auto;",
                            "{err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            class: "course-button course-button-secondary",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                {children}
            }
        }
    }
}

/// Inline panel for a section that could not be shown.
#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",
            gap: "10px",
            padding: "30px",

            div {
                style: "color: #B91C1C; font-size: 20px;",
                "Could not load this section",
            }

            pre {
                style: "color: #7F1D1D; border: 1px solid #EF4444; padding: 10px; border-radius: 5px; text-wrap: auto; max-width: 500px; max-height: 300px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}
