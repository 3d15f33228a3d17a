use crate::view_model::{AppViewModel, SUBMIT_LABEL_BUSY, SUBMIT_LABEL_IDLE};
use crate::{AnswerPayload, ResolveSummary, SourceMapping, SourceResolver};

pub type RequestId = u64;

/// Shown in place of an answer whenever a request fails, whatever the cause.
pub const APOLOGY_MESSAGE: &str = "Sorry, something went wrong. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Checking,
    Online,
    Unreachable,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    question: String,
    request: RequestState,
    answer: String,
    sources: SourceResolver,
    backend: BackendStatus,
    next_request_id: RequestId,
    in_flight: Option<RequestId>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_mapping(mapping: SourceMapping) -> Self {
        Self {
            sources: SourceResolver::new(mapping),
            ..Self::default()
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn request_state(&self) -> RequestState {
        self.request
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn source_urls(&self) -> &[String] {
        self.sources.urls()
    }

    pub fn can_submit(&self) -> bool {
        !self.question.trim().is_empty() && self.request != RequestState::Loading
    }

    pub fn view(&self) -> AppViewModel {
        let loading = self.request == RequestState::Loading;
        AppViewModel {
            question: self.question.clone(),
            request_state: self.request,
            input_enabled: !loading,
            submit_visible: self.answer.is_empty(),
            submit_enabled: self.can_submit(),
            submit_label: if loading {
                SUBMIT_LABEL_BUSY
            } else {
                SUBMIT_LABEL_IDLE
            },
            answer: (!self.answer.is_empty()).then(|| self.answer.clone()),
            source_urls: self.sources.urls().to_vec(),
            backend: self.backend,
        }
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_question(&mut self, text: String) {
        if self.question != text {
            self.question = text;
            self.mark_dirty();
        }
    }

    /// Moves to `Loading` and allocates the id the response must carry.
    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.answer.clear();
        self.request = RequestState::Loading;
        self.in_flight = Some(request_id);
        self.mark_dirty();
        request_id
    }

    /// Returns false when `request_id` is not the request currently awaited.
    pub(crate) fn is_awaiting(&self, request_id: RequestId) -> bool {
        self.in_flight == Some(request_id)
    }

    pub(crate) fn apply_answer(&mut self, payload: AnswerPayload) -> ResolveSummary {
        self.in_flight = None;
        self.answer = payload.message;
        self.request = RequestState::Succeeded;
        self.mark_dirty();
        self.sources.resolve(&payload.chunks)
    }

    pub(crate) fn apply_failure(&mut self) {
        self.in_flight = None;
        self.answer = APOLOGY_MESSAGE.to_string();
        self.request = RequestState::Failed;
        self.mark_dirty();
    }

    /// Back to the initial state. Returns the request that was still in flight.
    pub(crate) fn reset(&mut self) -> Option<RequestId> {
        let abandoned = self.in_flight.take();
        self.question.clear();
        self.answer.clear();
        self.request = RequestState::Idle;
        self.sources.clear();
        self.mark_dirty();
        abandoned
    }

    pub(crate) fn set_backend(&mut self, status: BackendStatus) {
        if self.backend != status {
            self.backend = status;
            self.mark_dirty();
        }
    }
}
