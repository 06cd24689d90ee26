//! HTML rendering for the todo page.
//!
//! The full page embeds the list fragment; htmx swaps the fragment (`#todo-list`)
//! after every create or delete.

use super::types::Todo;

use std::fmt::Write;

const INDEX_TEMPLATE: &str = include_str!("index.html");
const LIST_PLACEHOLDER: &str = "{{todo_list}}";

/// Renders the whole page with `todos` already in place.
pub fn render_index(todos: &[Todo]) -> String {
    INDEX_TEMPLATE.replace(LIST_PLACEHOLDER, &render_todo_list(todos))
}

/// Renders the `<ul id="todo-list">` fragment.
pub fn render_todo_list(todos: &[Todo]) -> String {
    let mut html = String::from("<ul id=\"todo-list\">\n");
    for todo in todos {
        // writing into a String cannot fail
        let _ = writeln!(
            html,
            "    <li id=\"todo-{id}\"><span>{text}</span> \
             <button hx-delete=\"/todo/{id}\" hx-target=\"#todo-list\" hx-swap=\"outerHTML\">Delete</button></li>",
            id = todo.id,
            text = escape_html(&todo.text),
        );
    }
    html.push_str("</ul>");
    html
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
