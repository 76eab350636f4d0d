use crate::error::{Result, TodozError};
use crate::model::Todo;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, id: &str) -> Result<Todo> {
    if id.is_empty() {
        return Err(TodozError::Validation("ID is required".to_string()));
    }

    store
        .read(id)
        .ok_or_else(|| TodozError::NotFound(id.to_string()))
}
