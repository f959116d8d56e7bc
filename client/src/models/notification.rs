use serde::{Deserialize, Serialize};

use crate::api::types::NotificationDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i32,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub image_path: Option<String>,
    pub created_by: String,
    pub created_at: String,
    pub module_id: Option<i32>,
    pub audience: String,
    pub is_read: bool,
}

impl From<NotificationDto> for Notification {
    fn from(dto: NotificationDto) -> Self {
        Self {
            id: dto.id,
            kind: dto.kind,
            title: dto.title,
            message: dto.message,
            image_path: dto.image_path,
            created_by: dto.created_by,
            created_at: dto.created_at,
            module_id: dto.module_id,
            audience: dto.audience,
            is_read: dto.is_read.unwrap_or(false),
        }
    }
}
