use chrono::Utc;
use colored::*;
use todoz::api::TodozApi;
use todoz::error::Result;
use todoz::model::{Todo, TodoPatch};
use todoz::store::memory::InMemoryStore;
use unicode_width::UnicodeWidthStr;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Scripted walkthrough of the service surface. The store lives in memory,
/// so one process is one session; each stage prints what it did.
fn run() -> Result<()> {
    let mut api = TodozApi::new(InMemoryStore::new());

    let learn = api.create_todo(
        "Learn Rust".to_string(),
        Some("Study ownership and borrowing".to_string()),
    )?;
    let build = api.create_todo(
        "Build a project".to_string(),
        Some("Use the todoz crate".to_string()),
    )?;
    println!("{}", "Created todos:".bold());
    print_todos(&[learn.clone(), build.clone()]);

    println!();
    println!("{}", "All todos:".bold());
    print_todos(&api.list_todos(None)?);

    println!();
    println!("{}", "Search results for \"project\":".bold());
    print_todos(&api.list_todos(Some("project"))?);

    println!();
    let done = api.update_todo(&learn.id, &TodoPatch::new().with_completed(true))?;
    println!("{} {}", "Completed:".green(), done.title);

    api.delete_todo(&build.id)?;
    println!("{} {}", "Deleted:".red(), build.title);

    println!();
    println!("{}", "Remaining todos:".bold());
    print_todos(&api.list_todos(None)?);

    Ok(())
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const DONE_MARKER: &str = "[x]";
const OPEN_MARKER: &str = "[ ]";

fn print_todos(todos: &[Todo]) {
    if todos.is_empty() {
        println!("No todos found.");
        return;
    }

    for todo in todos {
        let marker = if todo.completed {
            DONE_MARKER.green()
        } else {
            OPEN_MARKER.normal()
        };

        let time_ago = format_time_ago(todo.created_at);

        let title_content = if todo.description.is_empty() {
            todo.title.clone()
        } else {
            format!("{} {}", todo.title, todo.description)
        };

        let fixed_width = DONE_MARKER.width() + 3 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title_display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(title_display.width());

        println!(
            "{} {}{}  {}",
            marker,
            title_display,
            " ".repeat(padding),
            time_ago.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    // Singular units render one character short; pad them so the column
    // stays aligned.
    let time_str = time_str
        .replace("second ago", "second  ago")
        .replace("minute ago", "minute  ago")
        .replace("hour ago", "hour  ago");

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
