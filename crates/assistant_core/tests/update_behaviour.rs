use std::sync::Once;

use assistant_core::{
    update, AnswerPayload, AppState, BackendStatus, Effect, FailureKind, Msg, RequestState,
    SourceChunk, APOLOGY_MESSAGE, SUBMIT_LABEL_BUSY, SUBMIT_LABEL_IDLE,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(assistant_logging::initialize_for_tests);
}

fn ask(state: AppState, question: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::QuestionChanged(question.to_string()));
    update(state, Msg::SubmitClicked)
}

fn sent_request_id(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::SendQuestion { request_id, .. } => Some(*request_id),
            _ => None,
        })
        .expect("send effect")
}

fn payload(message: &str, sources: &[&str]) -> AnswerPayload {
    AnswerPayload {
        message: message.to_string(),
        chunks: sources.iter().copied().map(SourceChunk::new).collect(),
    }
}

fn answer(state: AppState, request_id: u64, message: &str, sources: &[&str]) -> AppState {
    let (state, effects) = update(
        state,
        Msg::AnswerReceived {
            request_id,
            result: Ok(payload(message, sources)),
        },
    );
    assert!(effects.is_empty());
    state
}

#[test]
fn can_submit_requires_non_blank_question() {
    init_logging();
    let state = AppState::new();
    assert!(!state.can_submit());

    for blank in ["", " ", "\n\t  \n"] {
        let (state, _) = update(state.clone(), Msg::QuestionChanged(blank.to_string()));
        assert!(!state.can_submit(), "{blank:?} must not be submittable");
    }

    let (state, _) = update(state, Msg::QuestionChanged("  what is covered?  ".to_string()));
    assert!(state.can_submit());
}

#[test]
fn submit_sends_untrimmed_question_and_enters_loading() {
    init_logging();
    let (state, effects) = ask(AppState::new(), "  Does my policy cover hail?\n");

    assert_eq!(
        effects,
        vec![Effect::SendQuestion {
            request_id: 1,
            message: "  Does my policy cover hail?\n".to_string(),
        }]
    );
    assert_eq!(state.request_state(), RequestState::Loading);
    assert_eq!(state.in_flight(), Some(1));

    let view = state.view();
    assert!(!view.input_enabled);
    assert!(!view.submit_enabled);
    assert_eq!(view.submit_label, SUBMIT_LABEL_BUSY);
    assert_eq!(view.answer, None);
}

#[test]
fn blank_submit_is_noop() {
    init_logging();
    let (mut state, effects) = ask(AppState::new(), "   ");

    assert!(effects.is_empty());
    assert_eq!(state.request_state(), RequestState::Idle);
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn submit_while_loading_is_noop() {
    init_logging();
    let (state, _) = ask(AppState::new(), "first");
    let (state, _) = update(state, Msg::QuestionChanged("second".to_string()));
    let (state, effects) = update(state, Msg::SubmitClicked);

    assert!(effects.is_empty());
    assert_eq!(state.in_flight(), Some(1));
    assert_eq!(state.request_state(), RequestState::Loading);
}

#[test]
fn successful_answer_shows_message_and_sources() {
    init_logging();
    let (state, effects) = ask(AppState::new(), "auto?");
    let request_id = sent_request_id(&effects);

    let mut state = answer(
        state,
        request_id,
        "Auto policies cover collisions.",
        &["docs/penn_auto_policy.txt", "x/penn_home_coverage_basics.txt"],
    );

    assert_eq!(state.request_state(), RequestState::Succeeded);
    assert_eq!(state.in_flight(), None);
    assert!(state.consume_dirty());

    let view = state.view();
    assert_eq!(view.answer.as_deref(), Some("Auto policies cover collisions."));
    assert_eq!(
        view.source_urls,
        vec![
            "https://www.pennnationalinsurance.com/auto/policy".to_string(),
            "https://www.pennnationalinsurance.com/home/coverage/basics".to_string(),
        ]
    );
    assert!(view.input_enabled);
    assert!(!view.submit_visible);
    assert_eq!(view.submit_label, SUBMIT_LABEL_IDLE);
}

#[test]
fn http_failure_shows_apology_and_keeps_sources() {
    init_logging();
    let (state, effects) = ask(AppState::new(), "first");
    let state = answer(state, sent_request_id(&effects), "ok", &["penn_auto.txt"]);

    let (state, effects) = ask(state, "second");
    let request_id = sent_request_id(&effects);
    let (state, effects) = update(
        state,
        Msg::AnswerReceived {
            request_id,
            result: Err(FailureKind::HttpStatus(500)),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.request_state(), RequestState::Failed);
    assert_eq!(state.answer(), APOLOGY_MESSAGE);
    assert_eq!(
        state.source_urls(),
        ["https://www.pennnationalinsurance.com/auto"]
    );
}

#[test]
fn malformed_payload_shows_apology() {
    init_logging();
    let (state, effects) = ask(AppState::new(), "anything");
    let (state, _) = update(
        state,
        Msg::AnswerReceived {
            request_id: sent_request_id(&effects),
            result: Err(FailureKind::MalformedPayload),
        },
    );

    assert_eq!(state.request_state(), RequestState::Failed);
    assert_eq!(state.view().answer.as_deref(), Some(APOLOGY_MESSAGE));
    assert!(state.source_urls().is_empty());
}

#[test]
fn new_submission_clears_previous_answer() {
    init_logging();
    let (state, effects) = ask(AppState::new(), "first");
    let state = answer(state, sent_request_id(&effects), "first answer", &[]);

    let (state, effects) = ask(state, "second");

    assert_eq!(sent_request_id(&effects), 2);
    assert_eq!(state.answer(), "");
    assert_eq!(state.view().answer, None);
}

#[test]
fn sources_accumulate_across_questions_until_reset() {
    init_logging();
    let (state, effects) = ask(AppState::new(), "first");
    let state = answer(
        state,
        sent_request_id(&effects),
        "one",
        &["penn_a.txt", "penn_b.txt"],
    );
    let (state, effects) = ask(state, "second");
    let state = answer(
        state,
        sent_request_id(&effects),
        "two",
        &["penn_c.txt", "other/penn_a.txt"],
    );

    assert_eq!(
        state.source_urls(),
        [
            "https://www.pennnationalinsurance.com/a",
            "https://www.pennnationalinsurance.com/b",
            "https://www.pennnationalinsurance.com/c",
        ]
    );
}

#[test]
fn reset_after_success_restores_initial_state() {
    init_logging();
    let (state, effects) = ask(AppState::new(), "question");
    let state = answer(state, sent_request_id(&effects), "answer", &["penn_auto.txt"]);

    let (state, effects) = update(state, Msg::NewQuestionClicked);

    assert!(effects.is_empty());
    assert_eq!(state.question(), "");
    assert_eq!(state.answer(), "");
    assert_eq!(state.request_state(), RequestState::Idle);
    assert!(state.source_urls().is_empty());

    let view = state.view();
    assert!(view.submit_visible);
    assert!(!view.submit_enabled);
    assert_eq!(view.answer, None);
}

#[test]
fn reset_while_loading_cancels_and_ignores_late_answer() {
    init_logging();
    let (state, effects) = ask(AppState::new(), "slow question");
    let request_id = sent_request_id(&effects);

    let (state, effects) = update(state, Msg::NewQuestionClicked);
    assert_eq!(effects, vec![Effect::CancelRequest { request_id }]);
    assert_eq!(state.request_state(), RequestState::Idle);

    let (mut state, _) = update(state, Msg::Tick);
    assert!(state.consume_dirty());

    let (mut state, effects) = update(
        state,
        Msg::AnswerReceived {
            request_id,
            result: Ok(payload("late answer", &["penn_auto.txt"])),
        },
    );

    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state.answer(), "");
    assert_eq!(state.request_state(), RequestState::Idle);
    assert!(state.source_urls().is_empty());
}

#[test]
fn answer_for_superseded_request_is_ignored() {
    init_logging();
    let (state, effects) = ask(AppState::new(), "first");
    let first = sent_request_id(&effects);
    let (state, _) = update(state, Msg::NewQuestionClicked);
    let (state, effects) = ask(state, "second");
    let second = sent_request_id(&effects);
    assert_ne!(first, second);

    let (state, _) = update(
        state,
        Msg::AnswerReceived {
            request_id: first,
            result: Err(FailureKind::Cancelled),
        },
    );
    assert_eq!(state.request_state(), RequestState::Loading);

    let state = answer(state, second, "second answer", &[]);
    assert_eq!(state.answer(), "second answer");
}

#[test]
fn question_edits_are_stored_verbatim() {
    init_logging();
    let (mut state, _) = update(AppState::new(), Msg::QuestionChanged("line one\n".to_string()));
    assert!(state.consume_dirty());
    assert_eq!(state.view().question, "line one\n");

    let (mut state, _) = update(state, Msg::QuestionChanged("line one\n".to_string()));
    assert!(!state.consume_dirty());
}

#[test]
fn startup_probes_backend_health() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Started);
    assert_eq!(effects, vec![Effect::CheckHealth]);
    assert_eq!(state.view().backend, BackendStatus::Checking);

    let (state, _) = update(state, Msg::BackendHealthChecked { healthy: false });
    assert_eq!(state.view().backend, BackendStatus::Unreachable);

    let (state, _) = update(state, Msg::BackendHealthChecked { healthy: true });
    assert_eq!(state.view().backend, BackendStatus::Online);
}

#[test]
fn state_uses_configured_source_mapping() {
    init_logging();
    let mapping = assistant_core::SourceMapping::new("kb-", ".md", "https://help.example.com/");
    let (state, effects) = ask(AppState::with_source_mapping(mapping), "claims?");
    let state = answer(
        state,
        sent_request_id(&effects),
        "File online.",
        &["export/kb-claims_file.md", "penn_auto.txt"],
    );

    assert_eq!(state.source_urls(), ["https://help.example.com/claims/file"]);
}
