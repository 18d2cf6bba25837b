use dioxus::prelude::*;


/// Title block shared by the screens, with an optional trail of links above it.
#[component]
pub fn PageHeader(title: String, #[props(default)] subtitle: String, children: Element) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
                padding: 24px 0px 16px 0px;
                border-bottom: 1px solid #DADDE3;
                margin-bottom: 20px;
            ",
            div {
                style: "font-size: 14px; color: #5A6172; display: flex; gap: 6px;",
                {children}
            }
            h1 { style: "margin: 0px; font-size: 28px;", "{title}" }
            if !subtitle.is_empty() {
                div { style: "color: #5A6172;", "{subtitle}" }
            }
        }
    }
}
