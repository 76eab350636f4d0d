use crate::error::{Result, TodozError};
use crate::model::{Todo, TodoPatch};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: &str, patch: &TodoPatch) -> Result<Todo> {
    if id.is_empty() {
        return Err(TodozError::Validation("ID is required".to_string()));
    }

    // Existence check and merge are two separate store calls. Nothing can
    // interleave in single-threaded use; a concurrent adaptation needs its
    // own synchronization around this pair.
    if store.read(id).is_none() {
        return Err(TodozError::NotFound(id.to_string()));
    }

    store
        .update(id, patch)
        .ok_or_else(|| TodozError::NotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn merges_patch_over_existing_record() {
        let mut store = InMemoryStore::new();
        let created = create::run(
            &mut store,
            "Old Title".into(),
            Some("Old Description".into()),
        )
        .unwrap();

        let merged = run(
            &mut store,
            &created.id,
            &TodoPatch::new().with_title("New Title"),
        )
        .unwrap();

        assert_eq!(merged.title, "New Title");
        assert_eq!(merged.description, "Old Description");
        assert_eq!(merged.id, created.id);
        assert_eq!(merged.created_at, created.created_at);
        assert_eq!(store.read(&created.id).unwrap(), merged);
    }

    #[test]
    fn completes_a_record() {
        let mut store = InMemoryStore::new();
        let created = create::run(&mut store, "Finish report".into(), None).unwrap();

        let merged = run(
            &mut store,
            &created.id,
            &TodoPatch::new().with_completed(true),
        )
        .unwrap();

        assert!(merged.completed);
        assert_eq!(merged.title, "Finish report");
    }

    #[test]
    fn rewrites_description_only() {
        let mut store = InMemoryStore::new();
        let created = create::run(&mut store, "Stable".into(), Some("Before".into())).unwrap();

        let merged = run(
            &mut store,
            &created.id,
            &TodoPatch::new().with_description("After"),
        )
        .unwrap();

        assert_eq!(merged.description, "After");
        assert_eq!(merged.title, "Stable");
        assert!(!merged.completed);
    }

    #[test]
    fn rejects_empty_id() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, "", &TodoPatch::new()).unwrap_err();
        assert!(matches!(err, TodozError::Validation(_)));
    }

    #[test]
    fn missing_id_is_not_found_and_leaves_storage_unchanged() {
        let mut store = InMemoryStore::new();
        create::run(&mut store, "Bystander".into(), None).unwrap();

        let err = run(
            &mut store,
            "999",
            &TodoPatch::new().with_title("Does not exist"),
        )
        .unwrap_err();

        assert!(matches!(err, TodozError::NotFound(_)));
        let all = store.read_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Bystander");
    }
}
