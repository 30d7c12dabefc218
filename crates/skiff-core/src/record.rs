use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::task::{Task, TaskDraft};

/// A stored row, in the store's snake-style schema (`user_id`, `due_date`,
/// `created_at`). Everything crossing the wire goes through the types in
/// this module; [`Task`] itself is never serialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: NaiveDate,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Insert payload. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewTaskRecord {
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub completed: bool,
}

/// Update payload for an edit. Completion state has no representation
/// here, so an edit can never alter it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TaskFieldsPatch {
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
}

/// Update payload for a completion toggle.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CompletedPatch {
    pub completed: bool,
}

impl NewTaskRecord {
    pub fn from_draft(owner: Uuid, draft: &TaskDraft) -> Self {
        Self {
            user_id: owner,
            title: draft.title.clone(),
            description: draft.description.clone(),
            due_date: draft.due_date,
            completed: false,
        }
    }
}

impl TaskFieldsPatch {
    pub fn from_draft(draft: &TaskDraft) -> Self {
        Self {
            title: draft.title.clone(),
            description: draft.description.clone(),
            due_date: draft.due_date,
        }
    }
}

impl From<TaskRecord> for Task {
    fn from(record: TaskRecord) -> Self {
        Self {
            id: record.id,
            owner: record.user_id,
            title: record.title,
            description: record.description,
            due_date: record.due_date,
            completed: record.completed,
            created_at: record.created_at,
        }
    }
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            user_id: task.owner,
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date,
            completed: task.completed,
            created_at: task.created_at,
        }
    }
}
