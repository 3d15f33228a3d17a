pub const TITLE: &str = "Penn National Insurance Assistant";
pub const LABEL_QUESTION: &str = "Your Question";
pub const QUESTION_PLACEHOLDER: &str = "Type your question here...";
pub const HELPER_TEXT: &str =
    "Ask questions about Penn National Insurance policies and coverage options.";
pub const LABEL_RESPONSE: &str = "Response:";
pub const BUTTON_NEW_QUESTION: &str = "Ask New Question";
pub const LABEL_SOURCES: &str = "urls where this info came from";

pub const COMMAND_ASK: &str = "/ask";
pub const COMMAND_NEW: &str = "/new";
pub const COMMAND_CLEAR: &str = "/clear";
pub const COMMAND_HELP: &str = "/help";
pub const COMMAND_QUIT: &str = "/quit";

pub const NOTICE_BUSY: &str =
    "Still processing the previous question. Type /new to cancel it.";
pub const NOTICE_EMPTY_QUESTION: &str = "Type a question first.";
pub const HINT_ASK_AGAIN: &str =
    "Edit the question (or /clear it) and press Enter on an empty line to ask again.";

pub const HELP_LINES: &[&str] = &[
    "Type your question; several lines are joined into one question.",
    "Press Enter on an empty line (or type /ask) to get an answer.",
    "/clear empty the question, keeping the answer and sources",
    "/new   clear the answer and sources and start over",
    "/help  show this help",
    "/quit  exit",
];
