//! Multi-tenant htmx todo list server.
//!
//! The crate is split into small subsystems that the binary (`main.rs`) wires together.
//!
//! ## Modules
//! - **`config`**: Command line flags (listen address, partition mode, static directory).
//! - **`session`**: Request tracking tokens and the derivation of per-user partition keys.
//! - **`todos`**: The in-memory todo store, HTML rendering and the HTTP handlers.
//! - **`server`**: Router construction, request logging and the serve loop.
//! - **`error`**: Error type shared by the handlers.

pub mod config;
pub mod error;
pub mod server;
pub mod session;
pub mod todos;
