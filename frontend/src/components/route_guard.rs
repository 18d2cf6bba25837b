//! Outermost layout: decides whether the current route may render.

use common::route_guard::{GuardDecision, evaluate};
use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::components::suspend_boundary::LoadingIndicator;
use crate::data_definitions::session_state::use_session_state;
use crate::routes::Route;


#[component]
pub fn RouteGuard() -> Element {
    let session = use_session_state();
    let route = use_route::<Route>();
    let decision = evaluate(route.access(), &session.auth());

    use_effect(use_reactive!(|decision| {
        let target = match decision {
            GuardDecision::RedirectToLogin => Route::LoginPage {},
            GuardDecision::RedirectToDefault => Route::MainPage {},
            GuardDecision::Loading | GuardDecision::Allow => return,
        };
        tracing::info!("route guard: {decision:?}, going to {target}");
        navigator().replace(target);
    }));

    match decision {
        GuardDecision::Allow => rsx! { Outlet::<Route> {} },
        _ => rsx! {
            div {
                style: "width: 100%; height: 100%; display: flex; align-items: center; justify-content: center;",
                LoadingIndicator {}
            }
        },
    }
}
