//! Frontend Models
//!
//! Data structures matching the remote todo API.

use serde::{Deserialize, Serialize};

/// Todo item (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u32,
    pub user_id: u32,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Id of a todo whose create request has not been confirmed yet
    pub const PLACEHOLDER_ID: u32 = 0;

    /// Row shown while a create request is in flight
    pub fn placeholder(draft: &TodoDraft) -> Self {
        Self {
            id: Self::PLACEHOLDER_ID,
            user_id: draft.user_id,
            title: draft.title.clone(),
            completed: draft.completed,
        }
    }

    /// Merge the fields set in `patch` into this todo
    pub fn apply(&mut self, patch: &TodoPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoDraft {
    pub title: String,
    pub user_id: u32,
    pub completed: bool,
}

impl TodoDraft {
    pub fn new(title: impl Into<String>, user_id: u32) -> Self {
        Self {
            title: title.into(),
            user_id,
            completed: false,
        }
    }
}

/// Partial update, only `title` and `completed` may change
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }
}

/// Which subset of todos the list shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Footer link order
    pub const VARIANTS: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Hash route the footer link points at
    pub fn href(&self) -> &'static str {
        match self {
            Filter::All => "#/",
            Filter::Active => "#/active",
            Filter::Completed => "#/completed",
        }
    }

    /// Restore a filter from `location.hash`, unknown routes mean `All`
    pub fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#').trim_matches('/') {
            "active" => Filter::Active,
            "completed" => Filter::Completed,
            _ => Filter::All,
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_todo_reads_camel_case_payload() {
        let todo: Todo = serde_json::from_value(json!({
            "id": 7,
            "userId": 2968,
            "title": "Buy milk",
            "completed": true,
        }))
        .unwrap();

        assert_eq!(todo.id, 7);
        assert_eq!(todo.user_id, 2968);
        assert!(todo.completed);
    }

    #[test]
    fn test_draft_body() {
        let body = serde_json::to_value(TodoDraft::new("Walk", 12)).unwrap();
        assert_eq!(body, json!({ "title": "Walk", "userId": 12, "completed": false }));
    }

    #[test]
    fn test_patch_omits_unset_fields() {
        let body = serde_json::to_value(TodoPatch::completed(true)).unwrap();
        assert_eq!(body, json!({ "completed": true }));

        let body = serde_json::to_value(TodoPatch::title("New")).unwrap();
        assert_eq!(body, json!({ "title": "New" }));
    }

    #[test]
    fn test_apply_patch() {
        let mut todo = Todo::placeholder(&TodoDraft::new("Old", 1));
        todo.apply(&TodoPatch::title("New"));
        assert_eq!(todo.title, "New");
        assert!(!todo.completed);

        todo.apply(&TodoPatch::completed(true));
        assert_eq!(todo.title, "New");
        assert!(todo.completed);
    }

    #[test]
    fn test_filter_from_hash() {
        assert_eq!(Filter::from_hash("#/active"), Filter::Active);
        assert_eq!(Filter::from_hash("#/completed"), Filter::Completed);
        assert_eq!(Filter::from_hash("#/"), Filter::All);
        assert_eq!(Filter::from_hash(""), Filter::All);
        assert_eq!(Filter::from_hash("#/whatever"), Filter::All);

        for filter in Filter::VARIANTS {
            assert_eq!(Filter::from_hash(filter.href()), filter);
        }
    }
}
