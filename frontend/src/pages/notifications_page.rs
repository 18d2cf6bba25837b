use common::notification::Notification;
use dioxus::prelude::*;
use gateway::api::notifications;

use crate::api::api_handle::{use_api, use_api_resource};
use crate::components::navbar::UnreadBadge;
use crate::components::page_header::PageHeader;
use crate::components::suspend_boundary::{EmptyState, LoadingIndicator};
use crate::routes::Route;


#[component]
pub fn NotificationsPage() -> Element {
    let mut list = use_api_resource("Could not load your notifications.", move |client| async move {
        notifications::list_notifications(&client).await
    });
    let badge = try_use_context::<UnreadBadge>();
    let on_read = use_callback(move |_: ()| {
        list.restart();
        if let Some(badge) = badge {
            badge.refresh();
        }
    });

    let unread = match &*list.read() {
        Some(Ok(list)) => list.unread_count(),
        _ => 0,
    };

    rsx! {
        Title { "Notifications" }
        PageHeader {
            title: "Notifications",
            subtitle: format!("{unread} unread"),
            Link { to: Route::MainPage {}, "Home" }
        }
        match &*list.read() {
            None => rsx! { LoadingIndicator {} },
            Some(Ok(list)) if !list.notifications.is_empty() => rsx! {
                div {
                    style: "display: flex; flex-direction: column; gap: 10px;",
                    for notification in list.notifications.iter().cloned() {
                        NotificationRow { key: "{notification.notification_id}", notification: notification.clone(), on_read }
                    }
                }
            },
            Some(_) => rsx! { EmptyState { message: "No notifications." } },
        }
    }
}

#[component]
fn NotificationRow(notification: ReadSignal<Notification>, on_read: Callback<()>) -> Element {
    let api = use_api();

    let mark_read = move |_| {
        let n = notification.read().clone();
        if n.is_read {
            return;
        }
        let client = api.client();
        spawn(async move {
            match notifications::mark_read(&client, &n.notification_id).await {
                Ok(_) => on_read.call(()),
                Err(e) => api.report_error(&e, "Could not update the notification."),
            }
        });
    };

    let n = notification.read().clone();
    let (background, weight) = if n.is_read { ("white", "normal") } else { ("#EFF6FF", "bold") };
    rsx! {
        div {
            class: "course-hover-shadow",
            style: "
                background-color: {background};
                border: 1px solid #DADDE3;
                border-radius: 8px;
                padding: 14px 18px;
                display: flex;
                flex-direction: row;
                gap: 12px;
                align-items: center;
            ",
            onclick: mark_read,
            div {
                style: "flex-grow: 1; font-weight: {weight};",
                "{n.message}"
            }
            div { style: "color: #5A6172; font-size: 13px;", "{n.created_at}" }
        }
    }
}
