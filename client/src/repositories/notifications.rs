use std::sync::Arc;

use crate::{api::ApiClient, error::ApiError, models::Notification};

#[derive(Clone)]
pub struct NotificationsRepository {
    client: Arc<ApiClient>,
}

impl NotificationsRepository {
    pub fn new_with_client(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch(&self, page: u32, size: u32) -> Result<Vec<Notification>, ApiError> {
        let items = self.client.get_notifications(page, size).await?;
        Ok(items.into_iter().map(Notification::from).collect())
    }

    pub async fn mark_read(&self, id: i32) -> Result<(), ApiError> {
        self.client.mark_notification_read(id).await
    }
}

/// Local update after a successful `mark_read`.
pub fn apply_read(mut items: Vec<Notification>, id: i32) -> Vec<Notification> {
    for item in items.iter_mut().filter(|item| item.id == id) {
        item.is_read = true;
    }
    items
}

pub fn unread_count(items: &[Notification]) -> usize {
    items.iter().filter(|item| !item.is_read).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(id: i32, is_read: bool) -> Notification {
        Notification {
            id,
            kind: "General".into(),
            title: format!("Notice {}", id),
            message: "Body".into(),
            image_path: None,
            created_by: "coord".into(),
            created_at: "2024-06-01T08:00:00".into(),
            module_id: None,
            audience: "All".into(),
            is_read,
        }
    }

    #[test]
    fn apply_read_flags_only_the_matching_entry() {
        let items = vec![notification(1, false), notification(2, false)];
        let updated = apply_read(items, 2);
        assert!(!updated[0].is_read);
        assert!(updated[1].is_read);
        assert_eq!(unread_count(&updated), 1);
    }

    #[test]
    fn apply_read_with_unknown_id_changes_nothing() {
        let items = vec![notification(1, false), notification(2, true)];
        let updated = apply_read(items.clone(), 99);
        assert_eq!(updated, items);
        assert_eq!(unread_count(&updated), 1);
    }
}
