use crate::error::{Result, TodozError};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(TodozError::Validation("ID is required".to_string()));
    }

    if !store.delete(id) {
        return Err(TodozError::NotFound(id.to_string()));
    }

    Ok(())
}
