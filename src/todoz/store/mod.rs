//! # Storage Layer
//!
//! This module defines the storage abstraction for todoz. The [`DataStore`]
//! trait allows the service to work with different storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** without wiring up anything real
//! - Allow **future backends** (database, file) without changing core logic
//! - Keep business logic **decoupled** from record bookkeeping
//!
//! ## Contract
//!
//! Storage never fails: a missing id is an explicit value (`None` / `false`),
//! not an error. Translating a miss into a failure the caller can branch on
//! is the command layer's job.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the only shipped backend
//!   - No persistence, one process = one session
//!   - Records iterate in first-insertion order

use crate::model::{Todo, TodoPatch};

pub mod memory;

/// Abstract interface for todo storage.
///
/// Implementations own the canonical set of records, keyed by id.
pub trait DataStore {
    /// Insert or overwrite a record keyed by its id. Overwrite is silent.
    /// Returns the stored record.
    fn create(&mut self, todo: Todo) -> Todo;

    /// Get a record by id.
    fn read(&self, id: &str) -> Option<Todo>;

    /// All records, in first-insertion order.
    fn read_all(&self) -> Vec<Todo>;

    /// Shallow-merge `patch` over the record at `id`: `Some` fields in the
    /// patch overwrite, `None` fields keep their stored value. Returns the
    /// merged record, or `None` if `id` is absent.
    fn update(&mut self, id: &str, patch: &TodoPatch) -> Option<Todo>;

    /// Remove the record at `id`. Returns whether a record was removed.
    fn delete(&mut self, id: &str) -> bool;
}
