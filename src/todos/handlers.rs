use super::render::{render_index, render_todo_list};
use super::store::TodoStore;
use crate::config::PartitionMode;
use crate::error::TodoError;
use crate::session::derive::derive_partition_key;
use crate::session::tracker::RequestId;

use axum::extract::rejection::{FormRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::{Extension, Form};
use regex::Regex;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::{Arc, LazyLock};

pub const STYLESHEET: &str = "main.css";

static ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TodoStore>,
    pub partition: PartitionMode,
    pub static_dir: PathBuf,
}

impl AppState {
    /// Maps a request onto the partition key its todos are stored under.
    pub fn partition_key(&self, request_id: &RequestId) -> String {
        match self.partition {
            PartitionMode::Session => derive_partition_key(&request_id.0),
            PartitionMode::Global => String::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateTodoForm {
    #[serde(default)]
    pub text: String,
}

/// Parses a path id: ASCII digits only, and it must fit in a `u64`.
pub fn parse_todo_id(raw: &str) -> Result<u64, TodoError> {
    if !ID_PATTERN.is_match(raw) {
        return Err(TodoError::InvalidId(raw.to_string()));
    }
    raw.parse()
        .map_err(|_| TodoError::InvalidId(raw.to_string()))
}

pub async fn handle_index(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Html<String> {
    let key = state.partition_key(&request_id);
    let todos = state.store.list(&key).await;

    Html(render_index(&todos))
}

pub async fn handle_create_todo(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    form: Result<Form<CreateTodoForm>, FormRejection>,
) -> Html<String> {
    // an unreadable or missing form body reads as empty text
    let form = form.map(|Form(form)| form).unwrap_or_else(|rejection| {
        tracing::debug!("Treating create request as empty text: {}", rejection);
        CreateTodoForm::default()
    });

    let key = state.partition_key(&request_id);
    let todos = state.store.create(&key, form.text).await;

    let partitions = state.store.partition_count().await;
    tracing::debug!(
        "Partition {:?} now holds {} todo(s); {} partition(s) in total",
        key,
        todos.len(),
        partitions
    );

    Html(render_todo_list(&todos))
}

pub async fn handle_delete_todo(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<Html<String>, TodoError> {
    let Path(raw_id) = raw_id.map_err(|rejection| TodoError::InvalidId(rejection.body_text()))?;
    let id = parse_todo_id(&raw_id)?;
    let key = state.partition_key(&request_id);
    let todos = state.store.delete(&key, id).await;

    Ok(Html(render_todo_list(&todos)))
}

pub async fn handle_stylesheet(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, TodoError> {
    let path = state.static_dir.join(STYLESHEET);
    let css = tokio::fs::read(&path)
        .await
        .map_err(|source| TodoError::StaticAsset {
            path: path.display().to_string(),
            source,
        })?;

    Ok(([(header::CONTENT_TYPE, "text/css; charset=utf-8")], css))
}
