use colored::Colorize;
use todos::api::{CmdMessage, MessageLevel};
use todos::form::FieldErrors;
use todos::model::Todo;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_WIDTH: usize = 34;
const DONE_MARKER: &str = "✓";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub fn print_field_errors(errors: &FieldErrors) {
    for (field, message) in errors.iter() {
        eprintln!("{}: {}", field.to_string().bold(), message.red());
    }
}

pub fn print_todos(todos: &[Todo]) {
    if todos.is_empty() {
        println!("No tasks yet");
        return;
    }

    for (i, todo) in todos.iter().enumerate() {
        let marker = if todo.is_completed() { DONE_MARKER } else { " " };
        let title = pad_to_width(&todo.title, TITLE_WIDTH);
        let line = format!("{:>3}. [{}] {} {}", i + 1, marker, title, todo.description);

        if todo.is_completed() {
            println!("{}  {}", line.dimmed(), todo.id.to_string().dimmed());
        } else {
            println!("{}  {}", line, todo.id.to_string().dimmed());
        }
    }
}

fn pad_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        let padding = width - text.width();
        return format!("{}{}", text, " ".repeat(padding));
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_titles() {
        assert_eq!(pad_to_width("abc", 6), "abc   ");
    }

    #[test]
    fn truncates_long_titles_to_width() {
        let padded = pad_to_width("abcdefghij", 6);
        assert_eq!(padded, "abcde…");
        assert_eq!(padded.width(), 6);
    }

    #[test]
    fn measures_wide_characters() {
        let padded = pad_to_width("日本語", 8);
        assert_eq!(padded.width(), 8);
    }
}
