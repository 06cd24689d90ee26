//! Todo Store
//!
//! All todo lists live in one `HashMap` keyed by partition key. The map and the id
//! counter sit behind a single mutex so that "read list, append, bump counter" is
//! seen as one step by every other request. Callers only ever get copies of a list;
//! rendering happens after the lock is released.

use super::types::Todo;

use std::collections::HashMap;
use tokio::sync::Mutex;

#[derive(Default)]
struct StoreState {
    todos: HashMap<String, Vec<Todo>>,
    next_id: u64,
}

#[derive(Default)]
pub struct TodoStore {
    state: Mutex<StoreState>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the todos of `key`. Unknown keys yield an empty list.
    pub async fn list(&self, key: &str) -> Vec<Todo> {
        let state = self.state.lock().await;
        state.todos.get(key).cloned().unwrap_or_default()
    }

    /// Appends a todo with the next global id and returns the updated list.
    pub async fn create(&self, key: &str, text: String) -> Vec<Todo> {
        let mut state = self.state.lock().await;
        let id = state.next_id;
        state.next_id += 1;

        let todos = state.todos.entry(key.to_string()).or_default();
        todos.push(Todo { id, text });
        tracing::debug!("Created todo {} in partition {:?}", id, key);

        todos.clone()
    }

    /// Removes every todo of `key` whose id matches and returns the updated list.
    ///
    /// Missing ids and unknown keys are no-ops; an unknown key is not inserted.
    pub async fn delete(&self, key: &str, id: u64) -> Vec<Todo> {
        let mut state = self.state.lock().await;
        let Some(todos) = state.todos.get_mut(key) else {
            return Vec::new();
        };

        let before = todos.len();
        todos.retain(|todo| todo.id != id);
        tracing::debug!(
            "Deleted {} todo(s) with id {} from partition {:?}",
            before - todos.len(),
            id,
            key
        );

        todos.clone()
    }

    #[cfg(test)]
    pub async fn len(&self, key: &str) -> usize {
        let state = self.state.lock().await;
        state.todos.get(key).map_or(0, Vec::len)
    }

    /// Number of partitions that have ever received a todo.
    pub async fn partition_count(&self) -> usize {
        self.state.lock().await.todos.len()
    }
}
