use crate::error::{Result, TodozError};
use crate::model::Todo;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    store: &mut S,
    title: String,
    description: Option<String>,
) -> Result<Todo> {
    if title.is_empty() {
        return Err(TodozError::Validation("Title is required".to_string()));
    }

    let todo = Todo::new(title, description.unwrap_or_default());
    Ok(store.create(todo))
}
