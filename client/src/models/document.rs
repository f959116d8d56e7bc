use serde::{Deserialize, Serialize};

use super::trimmed;
use crate::api::types::DocumentDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: i32,
    pub title: String,
    pub file_url: String,
    pub uploaded_at: String,
    pub uploaded_by: String,
    pub uploaded_by_user_name: String,
    pub module_id: Option<i32>,
    pub source: String,
    /// Only a few endpoints report these two.
    pub size_bytes: Option<u64>,
    pub label: Option<String>,
}

impl Document {
    /// Label when the server sent one, otherwise the title.
    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .filter(|label| !label.is_empty())
            .unwrap_or(&self.title)
    }
}

impl From<DocumentDto> for Document {
    fn from(dto: DocumentDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title.trim().to_string(),
            file_url: dto.file_path,
            uploaded_at: dto.uploaded_at,
            uploaded_by: dto.uploaded_by,
            uploaded_by_user_name: dto.uploaded_by_user_name,
            module_id: dto.module_id,
            source: trimmed(dto.source),
            size_bytes: dto.size_bytes,
            label: dto
                .label
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty()),
        }
    }
}
