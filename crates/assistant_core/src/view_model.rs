use crate::{BackendStatus, RequestState};

pub const SUBMIT_LABEL_IDLE: &str = "Get Answer";
pub const SUBMIT_LABEL_BUSY: &str = "Processing...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub question: String,
    pub request_state: RequestState,
    /// The question input accepts edits.
    pub input_enabled: bool,
    /// Hidden while an answer is on screen; "Ask New Question" takes its place.
    pub submit_visible: bool,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    /// Present only once there is non-empty answer text.
    pub answer: Option<String>,
    pub source_urls: Vec<String>,
    pub backend: BackendStatus,
}

impl Default for AppViewModel {
    fn default() -> Self {
        Self {
            question: String::new(),
            request_state: RequestState::Idle,
            input_enabled: true,
            submit_visible: true,
            submit_enabled: false,
            submit_label: SUBMIT_LABEL_IDLE,
            answer: None,
            source_urls: Vec::new(),
            backend: BackendStatus::Unknown,
        }
    }
}
