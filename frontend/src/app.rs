use common::{route_guard::AuthState, toast::ToastQueue};
use dioxus::logger::tracing;
use dioxus::prelude::*;
use gateway::{ApiClient, GatewayConfig};

use crate::api::api_handle::ApiHandle;
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::components::toast_surface::ToastSurface;
use crate::data_definitions::feature_config::FeatureConfig;
use crate::data_definitions::session_state::SessionState;
use crate::data_definitions::toast_service::ToastService;
use crate::routes::Route;
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn gateway_config() -> GatewayConfig {
    GatewayConfig::from_env().unwrap_or_else(|e| {
        tracing::error!("{e}; using the default backend address");
        GatewayConfig::default()
    })
}

#[component]
pub fn App() -> Element {
    let auth = use_signal(AuthState::default);
    let mut session = use_context_provider(|| SessionState::new(auth));
    let queue = use_signal(ToastQueue::new);
    let toasts = use_context_provider(|| ToastService::new(queue));
    let base = use_signal(|| ApiClient::new(gateway_config()));
    use_context_provider(|| ApiHandle::new(base, session, toasts));
    use_context_provider(FeatureConfig::default);

    // routes render a loading state until this has run once
    use_effect(move || session.restore());

    rsx! {
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "preconnect", href: "https://fonts.gstatic.com" }
        document::Link { rel: "stylesheet", href: "https://fonts.googleapis.com/css2?family=Roboto:ital,wght@0,100..900;1,100..900&display=swap" }

        document::Link { rel: "stylesheet", href: MAIN_CSS }
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            Router::<Route> {}
        }
        ToastSurface {}
    }
}
