use crate::error::Result;
use crate::model::Todo;
use crate::store::DataStore;

/// List records, optionally narrowed to those whose title or description
/// contains `text_search` as a substring. Matching is case-sensitive and
/// unranked. An empty or absent term returns everything.
pub fn run<S: DataStore>(store: &S, text_search: Option<&str>) -> Result<Vec<Todo>> {
    let todos = store.read_all();

    match text_search {
        Some(term) if !term.is_empty() => Ok(todos
            .into_iter()
            .filter(|todo| todo.title.contains(term) || todo.description.contains(term))
            .collect()),
        _ => Ok(todos),
    }
}
