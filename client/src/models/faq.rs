use serde::{Deserialize, Serialize};

use super::trimmed;
use crate::api::types::FaqEntryDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub last_updated: String,
}

impl From<FaqEntryDto> for FaqEntry {
    fn from(dto: FaqEntryDto) -> Self {
        Self {
            id: dto.id,
            question: dto.question.trim().to_string(),
            answer: trimmed(dto.answer),
            last_updated: trimmed(dto.last_updated),
        }
    }
}

impl From<FaqEntry> for FaqEntryDto {
    fn from(entry: FaqEntry) -> Self {
        Self {
            id: entry.id,
            question: entry.question,
            answer: Some(entry.answer),
            last_updated: Some(entry.last_updated).filter(|v| !v.is_empty()),
        }
    }
}
