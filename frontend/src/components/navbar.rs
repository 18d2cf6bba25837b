//! Top header bar and the signed-in page frame.

use dioxus::logger::tracing;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdExitToApp, MdHome};
use dioxus_free_icons::icons::md_image_icons::MdPictureAsPdf;
use dioxus_free_icons::icons::md_social_icons::{MdNotifications, MdSchool};
use dioxus_free_icons::{Icon, IconShape};
use gateway::api::{auth, notifications};

use crate::api::api_handle::use_api;
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::session_state::use_session_state;
use crate::routes::Route;


/// Lets screens ask the header to refetch the unread counter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnreadBadge {
    generation: Signal<u32>,
}

impl UnreadBadge {
    pub fn refresh(&self) {
        let mut generation = self.generation;
        *generation.write() += 1;
    }
}

#[component]
pub fn Navbar() -> Element {
    let generation = use_signal(|| 0_u32);
    use_context_provider(|| UnreadBadge { generation });

    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
            ",

            div {
                id: "x-nav-header",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 24px;
                    height: 64px;
                    flex-shrink: 0;
                    padding: 0px 24px;
                    background-color: #1C212D;
                    color: white;
                ",
                NavbarLogo {}
                NavbarLinks {}
                div { style: "flex-grow: 1;" }
                NotificationBell { generation }
                NavbarUser {}
            }

            div {
                id: "x-page-container",
                style: "flex-grow: 1; overflow-y: auto; padding: 0px 32px 32px 32px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NavbarLogo() -> Element {
    rsx! {
        Link {
            to: Route::MainPage {},
            span {
                style: "color: white; display: flex; align-items: center; gap: 10px; font-size: 20px;",
                Icon { icon: MdSchool, style: "width: 30px; height: 30px;" }
                "Course Notes"
            }
        }
    }
}

#[component]
fn NavbarLinks() -> Element {
    let session = use_session_state();
    let is_student = session.session().is_some_and(|s| s.is_student());

    rsx! {
        div {
            style: "display: flex; flex-direction: row; gap: 18px; align-items: center;",
            IconLink { to: Route::MainPage {}, icon: MdHome, label: "Home" }
            if is_student {
                IconLink { to: Route::MyCustomPdfsPage {}, icon: MdPictureAsPdf, label: "My custom PDFs" }
            }
        }
    }
}

#[component]
fn NotificationBell(generation: ReadSignal<u32>) -> Element {
    let api = use_api();
    // best effort: no badge when the counter is unavailable
    let unread = use_resource(move || {
        let _ = generation.read();
        let client = api.client();
        async move {
            match notifications::unread_count(&client).await {
                Ok(count) => count,
                Err(e) => {
                    tracing::debug!("unread counter unavailable: {e}");
                    0
                }
            }
        }
    });
    let count = unread().unwrap_or(0);

    rsx! {
        Link {
            to: Route::NotificationsPage {},
            span {
                style: "color: white; position: relative; display: flex;",
                title: "Notifications",
                Icon { icon: MdNotifications, style: "width: 26px; height: 26px;" }
                if count > 0 {
                    span {
                        style: "
                            position: absolute;
                            top: -6px;
                            right: -10px;
                            min-width: 18px;
                            padding: 0px 5px;
                            border-radius: 9px;
                            background-color: #EF4444;
                            color: white;
                            font-size: 12px;
                            text-align: center;
                        ",
                        "{count}"
                    }
                }
            }
        }
    }
}

#[component]
fn NavbarUser() -> Element {
    let api = use_api();
    let mut session = use_session_state();
    let Some(user) = session.session() else {
        return rsx! {};
    };

    let logout = move |_| {
        let client = api.client();
        session.sign_out();
        // outlives the header, which unmounts on the way to the login screen
        spawn_forever(async move {
            if let Err(e) = auth::logout(&client).await {
                tracing::warn!("logout request failed, session cleared locally: {e}");
            }
        });
        navigator().replace(Route::LoginPage {});
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: row; gap: 6px; align-items: baseline;",
            span { style: "font-weight: bold;", "{user.name}" }
            span { style: "opacity: 0.7; font-size: 14px;", "({user.role.label()})" }
        }
        button {
            class: "course-button course-button-secondary",
            style: "display: flex; align-items: center; gap: 6px;",
            onclick: logout,
            Icon { icon: MdExitToApp, style: "width: 18px; height: 18px;" }
            "Log out"
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                style: "color: white; display: flex; align-items: center; gap: 6px;",
                title: "{label}",
                Icon { icon: icon, style: "width: 22px; height: 22px;" }
                "{label}"
            }
        }
    }
}
