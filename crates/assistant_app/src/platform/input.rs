use assistant_core::{AppViewModel, Msg};

use super::ui::constants::*;

/// What one line typed at the terminal asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Dispatch(Msg),
    Notice(&'static str),
    Help,
    Quit,
    Ignore,
}

/// Maps a terminal line onto a core message, the way the page maps clicks and
/// keystrokes. Plain text appends a line to the question; an empty line submits.
pub fn translate(line: &str, view: &AppViewModel) -> InputAction {
    let trimmed = line.trim();
    match trimmed {
        COMMAND_QUIT => return InputAction::Quit,
        COMMAND_HELP => return InputAction::Help,
        COMMAND_NEW => return InputAction::Dispatch(Msg::NewQuestionClicked),
        COMMAND_ASK | "" => return submit(view),
        COMMAND_CLEAR => return edit(view, String::new()),
        _ => {}
    }

    let question = if view.question.is_empty() {
        line.to_string()
    } else {
        format!("{}\n{}", view.question, line)
    };
    edit(view, question)
}

fn edit(view: &AppViewModel, question: String) -> InputAction {
    if view.input_enabled {
        InputAction::Dispatch(Msg::QuestionChanged(question))
    } else {
        InputAction::Notice(NOTICE_BUSY)
    }
}

fn submit(view: &AppViewModel) -> InputAction {
    if !view.input_enabled {
        InputAction::Notice(NOTICE_BUSY)
    } else if view.submit_enabled {
        InputAction::Dispatch(Msg::SubmitClicked)
    } else if view.question.is_empty() {
        InputAction::Ignore
    } else {
        InputAction::Notice(NOTICE_EMPTY_QUESTION)
    }
}
