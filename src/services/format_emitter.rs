// uzbl session text rendering.
// A uzbl session file is a `curtab = N` header followed by one
// `<url> <title>` line per tab.

use crate::types::tab::TabRecord;

pub const SESSION_HEADER: &str = "curtab = 0\n";

/// Renders one group's tabs as newline-terminated uzbl session lines.
///
/// Titles are written verbatim; a newline inside a title ends up in the file.
pub fn render_group_as_text(tabs: &[TabRecord]) -> Vec<String> {
    let mut lines = Vec::with_capacity(tabs.len() + 1);
    lines.push(SESSION_HEADER.to_string());
    lines.extend(tabs.iter().map(|tab| format!("{} {}\n", tab.url, tab.title)));
    lines
}

/// File name for a group's session file.
///
/// Spaces and path separators become `_`. A title that is empty after that,
/// or is `.` or `..`, falls back to `anon_<id>`; whitespace-only titles do not.
pub fn session_file_name(title: &str, group_id: u64) -> String {
    let name = title.replace([' ', '/', '\\'], "_");
    if name.is_empty() || name == "." || name == ".." {
        format!("anon_{}", group_id)
    } else {
        name
    }
}
