use dioxus::prelude::*;


#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            style: "color: #5A6172; font-size: 18px; padding: 24px;",
            "Loading..."
        }
    }
}

/// Shown in place of a list that could not be fetched; the reason was
/// already toasted.
#[component]
pub fn EmptyState(message: String, #[props(default = VNode::empty())] children: Element) -> Element {
    rsx! {
        div {
            style: "
                color: #8A8F9C;
                text-align: center;
                padding: 40px 20px;
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 14px;
            ",
            span { "{message}" }
            {children}
        }
    }
}
