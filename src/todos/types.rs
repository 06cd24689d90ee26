/// A single todo item.
///
/// Ids are handed out by the `TodoStore` from one process-wide counter,
/// so they are unique across all partitions and never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub text: String,
}
