//! Notification inbox.

use common::{notification::{NotificationList, UnreadCount}, user::MessageResponse};

use crate::{client::{ApiClient, segment}, error::ApiError};


pub async fn list_notifications(client: &ApiClient) -> Result<NotificationList, ApiError> {
    client.get_json("/notifications").await
}

pub async fn mark_read(client: &ApiClient, notification_id: &str) -> Result<MessageResponse, ApiError> {
    client.post_empty(&format!("/notifications/{}/read", segment(notification_id))).await
}

/// Header badge counter. Callers treat failures as "no badge".
pub async fn unread_count(client: &ApiClient) -> Result<u64, ApiError> {
    let count: UnreadCount = client.get_json("/notifications/unread-count").await?;
    Ok(count.count)
}
