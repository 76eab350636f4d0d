use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo record. The store owns the canonical copy; everything the
/// API hands out is a clone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for [`Todo::generate`]. Anything left `None` gets a
/// default. `title` passes through untouched; presence checks belong to the
/// command layer, not the factory.
#[derive(Debug, Clone, Default)]
pub struct TodoDraft {
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl Todo {
    /// Build a record from a draft, stamping `created_at` and generating a
    /// UUID string when the draft carries no id.
    pub fn generate(draft: TodoDraft) -> Self {
        Self {
            id: draft.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            title: draft.title,
            description: draft.description.unwrap_or_default(),
            completed: draft.completed.unwrap_or(false),
            created_at: Utc::now(),
        }
    }

    pub fn new(title: String, description: String) -> Self {
        Self::generate(TodoDraft {
            title,
            description: Some(description),
            ..TodoDraft::default()
        })
    }
}

/// Partial update applied by the store's `update`. `Some` fields overwrite,
/// `None` fields keep their stored value. `id` and `created_at` are absent on
/// purpose: they cannot change after creation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}
