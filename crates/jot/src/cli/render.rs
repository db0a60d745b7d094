use colored::Colorize;
use jotapp::commands::{CmdMessage, MessageLevel};
use jotapp::render::{NoteView, RenderState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const PREVIEW_INDENT: &str = "    ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_state(state: &RenderState) {
    if let Some(empty) = &state.empty_message {
        println!("{}", empty.dimmed());
    }
    for view in &state.notes {
        print_note(view);
    }
    if !state.is_empty() {
        println!();
    }
    println!("{}", state.total_label.bold());
}

fn print_note(view: &NoteView) {
    let id = view.id.to_string();
    let fixed = id.width() + 2 + view.date_label.width() + 2;
    let title = truncate_to_width(&view.title, LINE_WIDTH.saturating_sub(fixed));
    let padding = LINE_WIDTH.saturating_sub(fixed + title.width());

    println!(
        "{}  {}{}  {}",
        id.yellow(),
        title.bold(),
        " ".repeat(padding),
        view.date_label.dimmed()
    );

    let preview = preview_line(&view.content);
    if !preview.is_empty() {
        let width = LINE_WIDTH.saturating_sub(PREVIEW_INDENT.width());
        println!("{}{}", PREVIEW_INDENT, truncate_to_width(&preview, width));
    }
}

fn preview_line(content: &str) -> String {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
