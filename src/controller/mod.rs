//! Todo Controller
//!
//! Owns the todo store and mediates every mutation: it marks pending state,
//! calls the API, and folds the outcome back into the store. Provided to the
//! component tree via the Leptos Context API.


use std::future::Future;
use std::sync::Arc;

use futures::future::join_all;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::TodoApi;
use crate::error::{ApiResult, ErrorKind};
use crate::filter::{filter_todos, TodoCounts};
use crate::models::{Filter, Todo, TodoDraft, TodoPatch};
use crate::store::*;
use crate::timer::Timer;

/// How long an error stays in the banner
pub const ERROR_DISPLAY_MS: u32 = 3000;

/// What committing a row's edit field should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Blank title: delete the todo
    Delete,
    /// Title unchanged: close the editor without a request
    Close,
    /// Rename to the trimmed title
    Rename(String),
}

pub fn edit_outcome(original: &str, draft: &str) -> EditOutcome {
    let clean = draft.trim();
    if clean.is_empty() {
        EditOutcome::Delete
    } else if clean == original {
        EditOutcome::Close
    } else {
        EditOutcome::Rename(clean.to_string())
    }
}

fn completed_of(todos: &[Todo], id: u32) -> bool {
    todos.iter().any(|todo| todo.id == id && todo.completed)
}

struct Services {
    api: Arc<dyn TodoApi>,
    timer: Arc<dyn Timer>,
}

#[derive(Clone, Copy)]
pub struct TodoController {
    store: TodoStore,
    services: StoredValue<Services>,
    user_id: u32,
}

/// Get the controller from context
pub fn use_controller() -> TodoController {
    expect_context::<TodoController>()
}

impl TodoController {
    pub fn new(user_id: u32, api: Arc<dyn TodoApi>, timer: Arc<dyn Timer>) -> Self {
        Self {
            store: Store::new(TodoState::default()),
            services: StoredValue::new(Services { api, timer }),
            user_id,
        }
    }

    pub fn store(&self) -> TodoStore {
        self.store
    }

    fn api(&self) -> Arc<dyn TodoApi> {
        self.services.with_value(|services| services.api.clone())
    }

    // ========================
    // Derived State (tracked)
    // ========================

    pub fn visible_todos(&self) -> Vec<Todo> {
        let filter = self.store.filter().get();
        self.store.todos().with(|todos| filter_todos(todos, filter))
    }

    pub fn counts(&self) -> TodoCounts {
        self.store.todos().with(|todos| TodoCounts::of(todos))
    }

    pub fn has_todos(&self) -> bool {
        self.store.todos().with(|todos| !todos.is_empty())
    }

    /// A delete or update is in flight for `id`
    pub fn is_busy(&self, id: u32) -> bool {
        self.store.deleting_ids().with(|ids| ids.contains(&id))
            || self.store.updating_ids().with(|ids| ids.contains(&id))
    }

    /// Stored completed flag of `id`, false once it is gone
    pub fn is_completed(&self, id: u32) -> bool {
        self.store.todos().with(|todos| completed_of(todos, id))
    }

    /// Untracked `is_completed`, for event handlers
    pub fn store_completed(&self, id: u32) -> bool {
        self.store.todos().with_untracked(|todos| completed_of(todos, id))
    }

    pub fn is_deleting_any(&self) -> bool {
        self.store.deleting_ids().with(|ids| !ids.is_empty())
    }

    pub fn error_message(&self) -> Option<String> {
        self.store.error().get().map(|notice| notice.kind.to_string())
    }

    // ========================
    // View State
    // ========================

    pub fn set_filter(&self, filter: Filter) {
        self.store.filter().set(filter);
    }

    pub fn set_title_input(&self, title: String) {
        self.store.title_input().set(title);
    }

    /// Show `kind` in the banner and schedule it to disappear
    pub fn show_error(&self, kind: ErrorKind) {
        let seq = store_show_error(&self.store, kind);
        let store = self.store;
        self.services.with_value(|services| {
            services
                .timer
                .schedule(ERROR_DISPLAY_MS, Box::new(move || store_expire_error(&store, seq)))
        });
    }

    pub fn hide_error(&self) {
        self.store.error().set(None);
    }

    // ========================
    // Operations
    // ========================

    /// Fetch the user's todos. On failure the collection stays empty.
    pub async fn load(&self) {
        match self.api().list(self.user_id).await {
            Ok(todos) => {
                log::info!("[TODOS] Loaded {} todos for user {}", todos.len(), self.user_id);
                self.store.todos().set(todos);
            }
            Err(err) => {
                log::warn!("[TODOS] Load failed: {}", err);
                self.show_error(ErrorKind::Load);
            }
        }
    }

    /// Create a todo from `title`, showing a placeholder row while in flight
    pub async fn add(&self, title: &str) {
        let title = title.trim();
        if title.is_empty() {
            self.show_error(ErrorKind::EmptyTitle);
            return;
        }

        let draft = TodoDraft::new(title, self.user_id);
        self.store.adding().set(true);
        self.store.temp_todo().set(Some(Todo::placeholder(&draft)));

        match self.api().create(&draft).await {
            Ok(todo) => {
                self.store.title_input().set(String::new());
                store_append_todo(&self.store, todo);
            }
            Err(err) => {
                log::warn!("[TODOS] Add failed: {}", err);
                self.show_error(ErrorKind::Add);
            }
        }

        self.store.adding().set(false);
        self.store.temp_todo().set(None);
    }

    /// Delete one todo. Returns whether the server confirmed it.
    pub async fn delete(&self, id: u32) -> bool {
        store_mark_pending(&self.store, PendingSet::Deleting, &[id]);

        let deleted = match self.api().remove(id).await {
            Ok(()) => {
                store_remove_todos(&self.store, &[id]);
                true
            }
            Err(err) => {
                log::warn!("[TODOS] Delete {} failed: {}", id, err);
                self.show_error(ErrorKind::Delete);
                false
            }
        };

        store_unmark_pending(&self.store, PendingSet::Deleting, id);
        deleted
    }

    /// Patch one todo and merge the fields locally on success
    pub async fn update(&self, id: u32, patch: TodoPatch) -> bool {
        store_mark_pending(&self.store, PendingSet::Updating, &[id]);

        let updated = match self.api().patch(id, &patch).await {
            Ok(()) => {
                store_patch_todo(&self.store, id, &patch);
                true
            }
            Err(err) => {
                log::warn!("[TODOS] Update {} failed: {}", id, err);
                self.show_error(ErrorKind::Update);
                false
            }
        };

        store_unmark_pending(&self.store, PendingSet::Updating, id);
        updated
    }

    /// Flip the stored completed flag of `id`. Returns whether the server accepted it.
    pub async fn toggle(&self, id: u32) -> bool {
        let completed = self.store_completed(id);
        self.update(id, TodoPatch::completed(!completed)).await
    }

    /// Run `action` for every todo concurrently and wait for all of them.
    ///
    /// Each id is unmarked as soon as its own request settles, and each failure
    /// shows `error` once. Returns the ids whose request succeeded.
    pub async fn run_batch<F, Fut>(
        &self,
        todos: Vec<Todo>,
        action: F,
        error: ErrorKind,
        pending: PendingSet,
    ) -> Vec<u32>
    where
        F: Fn(Todo) -> Fut,
        Fut: Future<Output = ApiResult<()>>,
    {
        let ids: Vec<u32> = todos.iter().map(|todo| todo.id).collect();
        store_mark_pending(&self.store, pending, &ids);

        let requests = todos.into_iter().map(|todo| {
            let id = todo.id;
            let request = action(todo);
            async move {
                let outcome = request.await;
                if let Err(err) = &outcome {
                    log::warn!("[TODOS] Batch request for {} failed: {}", id, err);
                    self.show_error(error);
                }
                store_unmark_pending(&self.store, pending, id);
                (id, outcome.is_ok())
            }
        });

        join_all(requests)
            .await
            .into_iter()
            .filter_map(|(id, ok)| ok.then_some(id))
            .collect()
    }

    /// Delete every completed todo. Failed ones stay in place.
    pub async fn clear_completed(&self) {
        let completed: Vec<Todo> = self
            .store
            .todos()
            .with_untracked(|todos| todos.iter().filter(|todo| todo.completed).cloned().collect());

        let api = self.api();
        let deleted = self
            .run_batch(
                completed,
                |todo| {
                    let api = api.clone();
                    async move { api.remove(todo.id).await }
                },
                ErrorKind::Delete,
                PendingSet::Deleting,
            )
            .await;

        store_remove_todos(&self.store, &deleted);
    }

    /// Complete everything, or un-complete everything if it is all done already
    pub async fn toggle_all(&self) {
        let (target, to_update) = self.store.todos().with_untracked(|todos| {
            let target = !TodoCounts::of(todos).all_completed();
            let to_update: Vec<Todo> = todos
                .iter()
                .filter(|todo| todo.completed != target)
                .cloned()
                .collect();
            (target, to_update)
        });

        let api = self.api();
        let updated = self
            .run_batch(
                to_update,
                |todo| {
                    let api = api.clone();
                    async move { api.patch(todo.id, &TodoPatch::completed(target)).await }
                },
                ErrorKind::Update,
                PendingSet::Updating,
            )
            .await;

        store_set_completed(&self.store, &updated, target);
    }
}
