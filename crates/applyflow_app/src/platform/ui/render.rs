use applyflow_core::{AppViewModel, Destination, StatusTone};

const TRUNCATED_MARKER: &str = "\n.[truncated]";
const MAX_BUFFER_PREVIEW: usize = 2048;

pub(crate) fn render_screen(screen: Destination, view: &AppViewModel) {
    print!("{}", render_to_string(screen, view));
}

pub(crate) fn render_to_string(screen: Destination, view: &AppViewModel) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n== {} ==\n", screen_title(screen)));

    if let Some(status) = &view.status {
        out.push_str(&format!("[{}] {}\n", tone_label(status.tone), status.text));
    }

    match screen {
        Destination::Login => {
            let controls = if view.controls_enabled {
                "enabled"
            } else {
                "disabled"
            };
            let selected = view
                .pending_intent
                .map(|intent| intent.wire_name())
                .unwrap_or("none");
            out.push_str(&format!(
                "controls: {controls} | selected action: {selected}\n"
            ));
        }
        Destination::CvScrape => {
            out.push_str("CV scraping runs on the backend; check back for results.\n");
        }
        Destination::JobApply => {
            out.push_str("profile buffer:\n");
            out.push_str(&buffer_preview(&view.editor_buffer));
            out.push('\n');
        }
    }
    out
}

pub(crate) fn screen_title(screen: Destination) -> &'static str {
    match screen {
        Destination::Login => "Login (index.html)",
        Destination::CvScrape => "CV Scrape (cv_scrape.html)",
        Destination::JobApply => "Job Apply (job_apply.html)",
    }
}

fn tone_label(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Info => "info",
        StatusTone::Loading => "wait",
        StatusTone::Success => "ok",
        StatusTone::Error => "error",
    }
}

fn buffer_preview(buffer: &str) -> String {
    if buffer.len() <= MAX_BUFFER_PREVIEW {
        return buffer.to_string();
    }
    let mut end = MAX_BUFFER_PREVIEW;
    while end > 0 && !buffer.is_char_boundary(end) {
        end -= 1;
    }
    let truncated = &buffer[..end];
    format!("{truncated}{TRUNCATED_MARKER}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use applyflow_core::{update, AppState, Intent, Msg};

    #[test]
    fn login_screen_shows_disabled_controls_while_submitting() {
        let (state, _) = update(AppState::new(), Msg::UsernameChanged("alice".to_string()));
        let (state, _) = update(state, Msg::PasswordChanged("secret".to_string()));
        let (state, _) = update(state, Msg::IntentClicked(Intent::JobApply));

        let rendered = render_to_string(Destination::Login, &state.view());

        assert!(rendered.contains("[wait] Logging in..."));
        assert!(rendered.contains("controls: disabled"));
        assert!(rendered.contains("selected action: job_apply"));
    }

    #[test]
    fn editor_screen_previews_the_buffer() {
        let state = AppState::new();
        let rendered = render_to_string(Destination::JobApply, &state.view());

        assert!(rendered.contains("Job Apply (job_apply.html)"));
        assert!(rendered.contains("\"personal_info\""));
    }

    #[test]
    fn long_buffers_are_truncated_on_a_char_boundary() {
        let long = "ä".repeat(MAX_BUFFER_PREVIEW);
        let preview = buffer_preview(&long);
        assert!(preview.ends_with(TRUNCATED_MARKER));
        assert!(preview.len() <= MAX_BUFFER_PREVIEW + TRUNCATED_MARKER.len());
    }
}
