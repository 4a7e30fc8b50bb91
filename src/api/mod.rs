//! Todo API
//!
//! Client-side bindings to the remote todo REST API.

mod http;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Todo, TodoDraft, TodoPatch};

pub use http::HttpTodoApi;

/// Operations the controller needs from the backend
///
/// Futures are `?Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait TodoApi: Send + Sync {
    /// `GET /todos?userId={id}`
    async fn list(&self, user_id: u32) -> ApiResult<Vec<Todo>>;

    /// `POST /todos`, returns the todo with its server-assigned id
    async fn create(&self, draft: &TodoDraft) -> ApiResult<Todo>;

    /// `DELETE /todos/{id}`
    async fn remove(&self, id: u32) -> ApiResult<()>;

    /// `PATCH /todos/{id}`; the response body is ignored
    async fn patch(&self, id: u32, patch: &TodoPatch) -> ApiResult<()>;
}
