use super::DataStore;
use crate::model::{Todo, TodoPatch};
use std::collections::HashMap;

/// In-memory storage. Does NOT persist data.
///
/// `order` tracks first-insertion order for `read_all`: overwriting an id
/// keeps its position, deleting and re-creating moves it to the back.
#[derive(Default)]
pub struct InMemoryStore {
    todos: HashMap<String, Todo>,
    order: Vec<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn create(&mut self, todo: Todo) -> Todo {
        if self.todos.insert(todo.id.clone(), todo.clone()).is_none() {
            self.order.push(todo.id.clone());
        }
        todo
    }

    fn read(&self, id: &str) -> Option<Todo> {
        self.todos.get(id).cloned()
    }

    fn read_all(&self) -> Vec<Todo> {
        self.order
            .iter()
            .filter_map(|id| self.todos.get(id).cloned())
            .collect()
    }

    fn update(&mut self, id: &str, patch: &TodoPatch) -> Option<Todo> {
        let todo = self.todos.get_mut(id)?;
        if let Some(title) = &patch.title {
            todo.title = title.clone();
        }
        if let Some(description) = &patch.description {
            todo.description = description.clone();
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        Some(todo.clone())
    }

    fn delete(&mut self, id: &str) -> bool {
        if self.todos.remove(id).is_none() {
            return false;
        }
        self.order.retain(|existing| existing != id);
        true
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_todos(mut self, count: usize) -> Self {
            for i in 0..count {
                let title = format!("Test Todo {}", i + 1);
                let description = format!("Description for todo {}", i + 1);
                self.store.create(Todo::new(title, description));
            }
            self
        }

        pub fn with_todo(mut self, title: &str, description: &str) -> Self {
            self.store
                .create(Todo::new(title.to_string(), description.to_string()));
            self
        }

        pub fn with_completed_todo(mut self, title: &str) -> Self {
            let mut todo = Todo::new(title.to_string(), "Already done".to_string());
            todo.completed = true;
            self.store.create(todo);
            self
        }
    }
}
