use std::sync::Arc;

use crate::{
    api::{ApiClient, FaqEntryDto},
    error::ApiError,
    models::FaqEntry,
};

#[derive(Clone)]
pub struct FaqRepository {
    client: Arc<ApiClient>,
}

impl FaqRepository {
    pub fn new_with_client(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Server-side search narrowed again by the local keyword filter.
    pub async fn fetch(
        &self,
        page: u32,
        size: u32,
        search: &str,
    ) -> Result<Vec<FaqEntry>, ApiError> {
        let term = search.trim();
        let server_term = (!term.is_empty()).then_some(term);
        let entries: Vec<FaqEntry> = self
            .client
            .get_faqs(page, size, server_term)
            .await?
            .into_iter()
            .map(FaqEntry::from)
            .collect();
        Ok(filter_by_keywords(entries, term))
    }

    pub async fn create(&self, entry: FaqEntry) -> Result<(), ApiError> {
        self.client.create_faq(&FaqEntryDto::from(entry)).await
    }

    pub async fn update(&self, entry: FaqEntry) -> Result<(), ApiError> {
        let id = entry.id;
        self.client.update_faq(id, &FaqEntryDto::from(entry)).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        self.client.delete_faq(id).await
    }
}

fn keywords(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split([',', ' '])
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect()
}

/// Keeps entries whose question and answer together contain every keyword.
pub fn filter_by_keywords(entries: Vec<FaqEntry>, query: &str) -> Vec<FaqEntry> {
    let words = keywords(query);
    if words.is_empty() {
        return entries;
    }
    entries
        .into_iter()
        .filter(|entry| {
            let haystack = format!("{} {}", entry.question, entry.answer).to_lowercase();
            words.iter().all(|word| haystack.contains(word.as_str()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i32, question: &str, answer: &str) -> FaqEntry {
        FaqEntry {
            id,
            question: question.into(),
            answer: answer.into(),
            last_updated: String::new(),
        }
    }

    fn ids(entries: &[FaqEntry]) -> Vec<i32> {
        entries.iter().map(|e| e.id).collect()
    }

    fn sample() -> Vec<FaqEntry> {
        vec![
            entry(1, "How do I book the lab?", "Use the Scheduler page."),
            entry(2, "Where is the exam venue?", "Check the assessment schedule."),
            entry(3, "Lab opening hours", "Monday to Saturday, 08:00-17:00."),
        ]
    }

    #[test]
    fn blank_query_returns_everything() {
        assert_eq!(ids(&filter_by_keywords(sample(), "")), vec![1, 2, 3]);
        assert_eq!(ids(&filter_by_keywords(sample(), " , ,")), vec![1, 2, 3]);
    }

    #[test]
    fn every_keyword_must_match_question_or_answer() {
        assert_eq!(ids(&filter_by_keywords(sample(), "LAB")), vec![1, 3]);
        assert_eq!(ids(&filter_by_keywords(sample(), "lab, scheduler")), vec![1]);
        assert_eq!(ids(&filter_by_keywords(sample(), "lab saturday")), vec![3]);
        assert!(filter_by_keywords(sample(), "lab exam").is_empty());
    }

    #[test]
    fn keywords_split_on_commas_and_spaces() {
        assert_eq!(keywords(" Exam,Venue  hall "), vec!["exam", "venue", "hall"]);
    }
}
