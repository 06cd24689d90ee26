//! Session Module
//!
//! Approximates user sessions without any session entity.
//!
//! ## Core Concepts
//! - **Tracking token**: Every request is tagged with an opaque token of the form
//!   `<name>/<segment>-<sequence>` by the `RequestTracker` middleware.
//! - **Partition key**: Dropping the trailing sequence number yields a key that is stable
//!   for all requests of one client, which the todo store uses to partition data.
//!
//! Sessions never expire; they live as long as the process.

pub mod derive;
pub mod tracker;
