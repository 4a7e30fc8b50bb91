//! HTTP Todo API
//!
//! `fetch`-backed implementation of [`TodoApi`] using gloo-net.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::TodoApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{Todo, TodoDraft, TodoPatch};

#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    base_url: String,
}

impl HttpTodoApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn list_url(&self, user_id: u32) -> String {
        self.url(&format!("/todos?userId={}", user_id))
    }

    fn todo_url(&self, id: u32) -> String {
        self.url(&format!("/todos/{}", id))
    }
}

/// Reject anything outside 2xx
fn check_status(response: Response) -> ApiResult<Response> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}

async fn send(request: Request) -> ApiResult<Response> {
    check_status(request.send().await?)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list(&self, user_id: u32) -> ApiResult<Vec<Todo>> {
        let request = Request::get(&self.list_url(user_id)).build()?;
        let response = send(request).await?;
        read_json(response).await
    }

    async fn create(&self, draft: &TodoDraft) -> ApiResult<Todo> {
        let request = Request::post(&self.url("/todos")).json(draft)?;
        let response = send(request).await?;
        read_json(response).await
    }

    async fn remove(&self, id: u32) -> ApiResult<()> {
        let request = Request::delete(&self.todo_url(id)).build()?;
        send(request).await?;
        Ok(())
    }

    async fn patch(&self, id: u32, patch: &TodoPatch) -> ApiResult<()> {
        let request = Request::patch(&self.todo_url(id)).json(patch)?;
        send(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        assert_eq!(
            HttpTodoApi::new("https://example.com/api/").url("/todos/3"),
            "https://example.com/api/todos/3"
        );
        assert_eq!(
            HttpTodoApi::new("https://example.com/api").url("/todos?userId=9"),
            "https://example.com/api/todos?userId=9"
        );
    }

    #[test]
    fn test_resource_urls() {
        let api = HttpTodoApi::new("https://example.com/api");
        assert_eq!(api.list_url(2968), "https://example.com/api/todos?userId=2968");
        assert_eq!(api.todo_url(17), "https://example.com/api/todos/17");
    }
}
