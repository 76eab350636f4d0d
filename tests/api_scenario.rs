use todoz::api::TodozApi;
use todoz::error::TodozError;
use todoz::model::TodoPatch;
use todoz::store::memory::InMemoryStore;

#[test]
fn full_walkthrough() {
    let mut api = TodozApi::new(InMemoryStore::new());

    let a = api
        .create_todo("Learn X".into(), Some("Study Y".into()))
        .unwrap();
    let b = api
        .create_todo("Build Z".into(), Some("Use W".into()))
        .unwrap();

    let all = api.list_todos(None).unwrap();
    assert_eq!(all.len(), 2);

    let hits = api.list_todos(Some("Use")).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, b.id);

    let done = api
        .update_todo(&a.id, &TodoPatch::new().with_completed(true))
        .unwrap();
    assert!(done.completed);
    assert_eq!(done.title, a.title);
    assert_eq!(done.description, a.description);
    assert_eq!(done.created_at, a.created_at);

    api.delete_todo(&b.id).unwrap();
    let remaining = api.list_todos(None).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, a.id);
}

#[test]
fn create_without_title_leaves_storage_untouched() {
    let mut api = TodozApi::new(InMemoryStore::new());

    let err = api
        .create_todo(String::new(), Some("x".into()))
        .unwrap_err();

    assert!(matches!(err, TodozError::Validation(_)));
    assert!(api.list_todos(None).unwrap().is_empty());
}

#[test]
fn missing_ids_surface_as_not_found() {
    let mut api = TodozApi::new(InMemoryStore::new());

    assert!(matches!(
        api.get_todo("nonexistent"),
        Err(TodozError::NotFound(_))
    ));
    assert!(matches!(
        api.update_todo("nonexistent", &TodoPatch::new().with_title("x")),
        Err(TodozError::NotFound(_))
    ));
    assert!(matches!(
        api.delete_todo("nonexistent"),
        Err(TodozError::NotFound(_))
    ));
}

#[test]
fn list_count_tracks_creates_and_deletes() {
    let mut api = TodozApi::new(InMemoryStore::new());
    let mut ids = Vec::new();

    for i in 0..5 {
        let todo = api.create_todo(format!("Todo {i}"), None).unwrap();
        ids.push(todo.id);
    }
    assert_eq!(api.list_todos(None).unwrap().len(), 5);

    api.delete_todo(&ids[0]).unwrap();
    api.delete_todo(&ids[3]).unwrap();
    assert_eq!(api.list_todos(None).unwrap().len(), 3);
}
