//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all todoz operations, regardless of the client in front of
//! it.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<Todo>`, `Result<Vec<Todo>>`)
//!
//! It explicitly avoids:
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O operations**: no stdout, stderr, or formatting
//!
//! ## Generic Over DataStore
//!
//! `TodozApi<S: DataStore>` is generic over the storage backend, so clients
//! and tests pick their own store and hand it to [`TodozApi::new`]. There is
//! no process-wide instance anywhere in the crate.
//!
//! ## Testing Strategy
//!
//! API tests verify that the right command is reached with the right
//! arguments; command logic and storage behavior are tested in their own
//! modules.

use crate::commands;
use crate::error::Result;
use crate::store::DataStore;

pub use crate::model::{Todo, TodoDraft, TodoPatch};

/// The main API facade for todoz operations.
///
/// Generic over `DataStore` to allow different storage backends. All clients
/// should interact through this API.
pub struct TodozApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> TodozApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create_todo(&mut self, title: String, description: Option<String>) -> Result<Todo> {
        commands::create::run(&mut self.store, title, description)
    }

    pub fn get_todo(&self, id: &str) -> Result<Todo> {
        commands::get::run(&self.store, id)
    }

    pub fn list_todos(&self, text_search: Option<&str>) -> Result<Vec<Todo>> {
        commands::list::run(&self.store, text_search)
    }

    pub fn update_todo(&mut self, id: &str, patch: &TodoPatch) -> Result<Todo> {
        commands::update::run(&mut self.store, id, patch)
    }

    pub fn delete_todo(&mut self, id: &str) -> Result<()> {
        commands::delete::run(&mut self.store, id)
    }
}
