use assistant_core::{AppViewModel, BackendStatus};
use console::style;

use super::constants::*;

/// One line of the terminal frame, before styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameLine {
    Title(String),
    Label(String),
    Text(String),
    Hint(String),
    Button {
        label: String,
        shortcut: &'static str,
        enabled: bool,
    },
    Link(String),
    Blank,
}

pub fn render(view: &AppViewModel) -> Vec<FrameLine> {
    let mut lines = vec![
        FrameLine::Title(TITLE.to_string()),
        FrameLine::Hint(format!("Backend: {}", backend_label(view.backend))),
        FrameLine::Blank,
    ];

    if view.input_enabled {
        lines.push(FrameLine::Label(LABEL_QUESTION.to_string()));
    } else {
        lines.push(FrameLine::Label(format!("{LABEL_QUESTION} (locked)")));
    }
    if view.question.is_empty() {
        lines.push(FrameLine::Hint(QUESTION_PLACEHOLDER.to_string()));
    } else {
        lines.extend(
            view.question
                .lines()
                .map(|line| FrameLine::Text(format!("> {line}"))),
        );
    }
    lines.push(FrameLine::Blank);

    if view.submit_visible {
        lines.push(FrameLine::Button {
            label: view.submit_label.to_string(),
            shortcut: "empty line or /ask",
            enabled: view.submit_enabled,
        });
    } else {
        lines.push(FrameLine::Hint(HINT_ASK_AGAIN.to_string()));
    }
    lines.push(FrameLine::Hint(HELPER_TEXT.to_string()));

    if let Some(answer) = &view.answer {
        lines.push(FrameLine::Blank);
        lines.push(FrameLine::Label(LABEL_RESPONSE.to_string()));
        lines.extend(answer.lines().map(|line| FrameLine::Text(line.to_string())));
        lines.push(FrameLine::Button {
            label: BUTTON_NEW_QUESTION.to_string(),
            shortcut: COMMAND_NEW,
            enabled: true,
        });
        lines.push(FrameLine::Label(LABEL_SOURCES.to_string()));
        lines.extend(view.source_urls.iter().cloned().map(FrameLine::Link));
    }

    lines
}

/// Styled text for one frame line.
pub fn paint(line: &FrameLine) -> String {
    match line {
        FrameLine::Title(text) => style(text).bold().underlined().to_string(),
        FrameLine::Label(text) => style(text).bold().to_string(),
        FrameLine::Text(text) => text.clone(),
        FrameLine::Hint(text) => style(text).dim().to_string(),
        FrameLine::Button {
            label,
            shortcut,
            enabled,
        } => {
            let button = format!("[ {label} ]");
            let button = if *enabled {
                style(button).cyan().bold()
            } else {
                style(button).dim()
            };
            format!("{button}  {}", style(format!("({shortcut})")).dim())
        }
        FrameLine::Link(url) => format!("  - {}", style(url).blue().underlined()),
        FrameLine::Blank => String::new(),
    }
}

fn backend_label(status: BackendStatus) -> &'static str {
    match status {
        BackendStatus::Unknown => "unknown",
        BackendStatus::Checking => "checking...",
        BackendStatus::Online => "online",
        BackendStatus::Unreachable => "unreachable",
    }
}
