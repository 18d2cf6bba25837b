use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::components::suspend_boundary::LoadingIndicator;
use crate::routes::Route;


/// Unknown paths go back to the main page.
#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    use_effect(move || {
        tracing::info!("unknown path /{}, redirecting", segments.join("/"));
        navigator().replace(Route::MainPage {});
    });
    rsx! { LoadingIndicator {} }
}
