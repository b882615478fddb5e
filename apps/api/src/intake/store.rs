//! In-memory submission store.
//!
//! Holds intake text for the recommendation and admin views. Bounded: once
//! full, the oldest submission is evicted. Nothing is persisted.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub id: Uuid,
    pub dream_text: String,
    pub created_at: DateTime<Utc>,
}

pub struct SubmissionStore {
    capacity: usize,
    // oldest at the front
    submissions: RwLock<VecDeque<Submission>>,
}

impl SubmissionStore {
    /// `capacity` is validated by `Config`; zero is still treated as one.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            submissions: RwLock::new(VecDeque::new()),
        }
    }

    pub async fn add(&self, dream_text: String) -> Submission {
        let submission = Submission {
            id: Uuid::new_v4(),
            dream_text,
            created_at: Utc::now(),
        };
        let mut submissions = self.submissions.write().await;
        while submissions.len() >= self.capacity {
            if let Some(evicted) = submissions.pop_front() {
                debug!(id = %evicted.id, "submission store full; evicted oldest");
            }
        }
        submissions.push_back(submission.clone());
        submission
    }

    pub async fn get(&self, id: Uuid) -> Option<Submission> {
        self.submissions
            .read()
            .await
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }

    /// All submissions, newest first.
    pub async fn list(&self) -> Vec<Submission> {
        self.submissions.read().await.iter().rev().cloned().collect()
    }

    /// Returns whether the submission existed.
    pub async fn remove(&self, id: Uuid) -> bool {
        let mut submissions = self.submissions.write().await;
        match submissions.iter().position(|s| s.id == id) {
            Some(idx) => {
                submissions.remove(idx);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_then_get() {
        let store = SubmissionStore::new(10);
        let added = store.add("I love design".to_string()).await;
        assert_eq!(store.get(added.id).await, Some(added));
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let store = SubmissionStore::new(10);
        let first = store.add("one".to_string()).await;
        let second = store.add("two".to_string()).await;
        let ids: Vec<Uuid> = store.list().await.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[tokio::test]
    async fn test_remove_reports_existence() {
        let store = SubmissionStore::new(10);
        let added = store.add("text".to_string()).await;
        assert!(store.remove(added.id).await);
        assert!(!store.remove(added.id).await);
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_capacity_evicts_oldest() {
        let store = SubmissionStore::new(2);
        let first = store.add("a".to_string()).await;
        store.add("b".to_string()).await;
        store.add("c".to_string()).await;
        let texts: Vec<String> = store.list().await.into_iter().map(|s| s.dream_text).collect();
        assert_eq!(texts, vec!["c", "b"]);
        assert!(store.get(first.id).await.is_none());
    }
}
