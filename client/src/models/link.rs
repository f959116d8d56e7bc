use serde::{Deserialize, Serialize};

use crate::api::types::RepositoryDto;

/// External repository card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryLink {
    pub id: i32,
    pub label: String,
    pub link_url: String,
    pub image_url: String,
}

impl From<RepositoryDto> for RepositoryLink {
    fn from(dto: RepositoryDto) -> Self {
        Self {
            id: dto.id,
            label: dto.label.trim().to_string(),
            link_url: dto.link_url.trim().to_string(),
            image_url: dto.image_url.trim().to_string(),
        }
    }
}
