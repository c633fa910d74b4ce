use std::sync::Once;

use applyflow_core::{update, AppState, Effect, Msg, StatusTone};
use serde_json::{json, Value};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn parse_buffer(state: &AppState) -> Value {
    serde_json::from_str(&state.view().editor_buffer).expect("buffer is valid json")
}

#[test]
fn fresh_state_seeds_the_template_document() {
    init_logging();
    let state = AppState::new();

    let doc = parse_buffer(&state);
    assert_eq!(doc["personal_info"]["name"], "Your Name");
    assert_eq!(doc["education"][0]["school"], "Your University");
    assert_eq!(doc["work_experience"][0]["start_date"], "MM/YYYY");
    assert_eq!(doc["languages"], json!(["English"]));
    assert_eq!(
        doc["questions"].as_object().map(|questions| questions.len()),
        Some(8)
    );
}

#[test]
fn valid_json_upload_replaces_buffer_with_pretty_round_trip() {
    init_logging();
    let uploaded = r#"{"name":"Ada","skills":["rust","nets"],"nested":{"a":1}}"#;

    let (state, effects) = update(
        AppState::new(),
        Msg::ResumeFileLoaded {
            content: uploaded.to_string(),
        },
    );

    assert!(effects.is_empty());
    // Structure passes through verbatim, only the formatting changes.
    let expected: Value = serde_json::from_str(uploaded).unwrap();
    assert_eq!(parse_buffer(&state), expected);
    assert!(state.view().editor_buffer.contains('\n'), "pretty-printed");
}

#[test]
fn non_json_upload_wraps_raw_text_in_fallback_shape() {
    init_logging();
    let content = "Jane Doe\n10 years herding cats\n";

    let (state, effects) = update(
        AppState::new(),
        Msg::ResumeFileLoaded {
            content: content.to_string(),
        },
    );

    assert!(effects.is_empty());
    let doc = parse_buffer(&state);
    assert_eq!(doc["resumeText"], content);
    assert_eq!(doc["name"], "");
    assert_eq!(doc["contact"], json!({"email": "", "phone": ""}));
    assert_eq!(doc["experience"], json!([]));
    assert_eq!(doc["education"], json!([]));
    assert_eq!(doc["skills"], json!([]));
}

#[test]
fn file_pick_requests_an_async_read() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::ResumeFilePicked("resume.json".into()),
    );

    assert_eq!(
        effects,
        vec![Effect::ReadResumeFile {
            path: "resume.json".into(),
        }]
    );
    // The buffer only changes once the read completes.
    assert_eq!(parse_buffer(&state)["personal_info"]["name"], "Your Name");
}

#[test]
fn save_with_valid_buffer_presents_the_parsed_profile() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::EditorChanged(r#"{"skills": ["rust"]}"#.to_string()),
    );

    let (state, effects) = update(state, Msg::SaveClicked);

    assert_eq!(
        effects,
        vec![Effect::PresentProfile {
            profile: json!({"skills": ["rust"]}),
        }]
    );
    let status = state.view().status.expect("save status");
    assert_eq!(status.tone, StatusTone::Success);
}

#[test]
fn save_with_malformed_buffer_reports_and_leaves_buffer_untouched() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::EditorChanged("{not json".to_string()),
    );

    let (state, effects) = update(state, Msg::SaveClicked);

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.editor_buffer, "{not json");
    let status = view.status.expect("validation status");
    assert_eq!(status.text, "Invalid JSON format. Please check your input.");
    assert_eq!(status.tone, StatusTone::Error);
}
