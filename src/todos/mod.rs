//! Todo Module
//!
//! Owns the todo lists and everything needed to serve them over HTTP.
//!
//! ## Submodules
//! - **`types`**: The `Todo` record.
//! - **`store`**: `TodoStore`, the in-memory map of partition key -> todos, plus the id counter.
//! - **`render`**: Server side HTML for the full page and the list fragment swapped in by htmx.
//! - **`handlers`**: Axum handlers for listing, creating and deleting todos.

pub mod handlers;
pub mod render;
pub mod store;
pub mod types;
