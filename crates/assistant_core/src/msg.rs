use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Frontend is up; triggers the startup health probe.
    Started,
    /// User edited the question text.
    QuestionChanged(String),
    /// User asked for an answer to the current question.
    SubmitClicked,
    /// User clicked "Ask New Question".
    NewQuestionClicked,
    /// Engine finished a request.
    AnswerReceived {
        request_id: crate::RequestId,
        result: Result<AnswerPayload, FailureKind>,
    },
    /// Engine finished the health probe.
    BackendHealthChecked { healthy: bool },
    /// UI/render tick.
    Tick,
}

/// A well-formed answer from the backend.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnswerPayload {
    pub message: String,
    pub chunks: Vec<SourceChunk>,
}

/// One retrieved chunk, reduced to the identifier the resolver needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceChunk {
    pub source: String,
}

impl SourceChunk {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// Why a request did not produce an answer. Never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    HttpStatus(u16),
    MalformedPayload,
    Cancelled,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Transport => write!(f, "transport failure"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::MalformedPayload => write!(f, "malformed payload"),
            FailureKind::Cancelled => write!(f, "cancelled"),
        }
    }
}
