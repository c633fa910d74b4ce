use std::io::Write;
use std::time::{Duration, Instant};

use applyflow_client::{
    AuthSettings, ClientEvent, ClientHandle, LoginAction, LoginRequest, Screen, REDIRECT_DELAY,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn wait_for_event(handle: &ClientHandle, deadline: Duration) -> ClientEvent {
    let start = Instant::now();
    loop {
        if let Some(event) = handle.try_recv() {
            return event;
        }
        assert!(
            start.elapsed() < deadline,
            "no client event within {deadline:?}"
        );
        std::thread::sleep(Duration::from_millis(20));
    }
}

#[test]
fn submitted_login_settles_with_exactly_one_event() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "tok"})))
            .mount(&server)
            .await;
        server
    });

    let handle = ClientHandle::new(AuthSettings {
        endpoint: server.uri(),
        ..AuthSettings::default()
    });
    handle.submit_login(LoginRequest {
        username: "alice".to_string(),
        password: "secret".to_string(),
        action: LoginAction::JobApply,
    });

    let event = wait_for_event(&handle, Duration::from_secs(5));
    let ClientEvent::LoginCompleted { result } = event else {
        panic!("expected a settlement event, got {event:?}");
    };
    assert_eq!(result.unwrap().token.as_deref(), Some("tok"));
    assert!(handle.try_recv().is_none(), "one settlement per submission");
}

#[test]
fn resume_read_delivers_file_content() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{\"skills\": []}}").unwrap();

    let handle = ClientHandle::new(AuthSettings::default());
    handle.read_resume_file(file.path());

    let event = wait_for_event(&handle, Duration::from_secs(5));
    assert_eq!(
        event,
        ClientEvent::ResumeLoaded {
            content: "{\"skills\": []}".to_string(),
        }
    );
}

#[test]
fn missing_resume_file_produces_no_event() {
    let handle = ClientHandle::new(AuthSettings::default());
    handle.read_resume_file("definitely/not/a/file.json");

    std::thread::sleep(Duration::from_millis(300));
    assert!(handle.try_recv().is_none());
}

#[test]
fn redirect_fires_after_the_fixed_delay() {
    let handle = ClientHandle::new(AuthSettings::default());
    let start = Instant::now();
    handle.schedule_redirect(Screen::JobApply);

    let event = wait_for_event(&handle, REDIRECT_DELAY + Duration::from_secs(5));
    assert_eq!(
        event,
        ClientEvent::RedirectDue {
            screen: Screen::JobApply,
        }
    );
    assert!(start.elapsed() >= REDIRECT_DELAY);
}
