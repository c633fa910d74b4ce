use std::time::Duration;

use applyflow_core::{AutoApplyParams, Intent, Msg};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ParsedLine {
    Core(Msg),
    Wait(Duration),
    Help,
    Quit,
}

/// Parse one command line. Returns `None` for blanks, comments and anything
/// unrecognized.
pub(crate) fn parse_line(line: &str) -> Option<ParsedLine> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (trimmed, ""),
    };

    let parsed = match command {
        "user" => ParsedLine::Core(Msg::UsernameChanged(rest.to_string())),
        "pass" => ParsedLine::Core(Msg::PasswordChanged(rest.to_string())),
        "cv" => ParsedLine::Core(Msg::IntentClicked(Intent::CvScrape)),
        "apply" => ParsedLine::Core(Msg::IntentClicked(Intent::JobApply)),
        "submit" => ParsedLine::Core(Msg::LoginSubmitted),
        "edit" => ParsedLine::Core(Msg::EditorChanged(rest.to_string())),
        "load" => {
            if rest.is_empty() {
                return None;
            }
            ParsedLine::Core(Msg::ResumeFilePicked(rest.into()))
        }
        "save" => ParsedLine::Core(Msg::SaveClicked),
        "autoapply" => ParsedLine::Core(Msg::AutoApplyRequested(parse_auto_apply(rest))),
        "back" => ParsedLine::Core(Msg::BackToLoginClicked),
        "wait" => ParsedLine::Wait(Duration::from_millis(rest.parse().ok()?)),
        "help" => ParsedLine::Help,
        "quit" | "exit" => ParsedLine::Quit,
        _ => return None,
    };
    Some(parsed)
}

/// Auto-apply inputs are pipe-separated in field order; missing trailing
/// fields stay empty and fail the core's required-field validation.
fn parse_auto_apply(rest: &str) -> AutoApplyParams {
    let mut fields = rest.splitn(6, '|').map(str::trim);
    let mut next = || fields.next().unwrap_or("").to_string();
    AutoApplyParams {
        api_key: next(),
        job_title: next(),
        job_location: next(),
        phone_number: next(),
        user_website: next(),
        max_applications: next(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_keep_inner_whitespace() {
        assert_eq!(
            parse_line("user mary jane"),
            Some(ParsedLine::Core(Msg::UsernameChanged(
                "mary jane".to_string()
            )))
        );
    }

    #[test]
    fn intent_commands_map_to_clicks() {
        assert_eq!(
            parse_line("cv"),
            Some(ParsedLine::Core(Msg::IntentClicked(Intent::CvScrape)))
        );
        assert_eq!(
            parse_line("  apply  "),
            Some(ParsedLine::Core(Msg::IntentClicked(Intent::JobApply)))
        );
    }

    #[test]
    fn blanks_comments_and_unknowns_are_ignored() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("# a comment"), None);
        assert_eq!(parse_line("frobnicate"), None);
    }

    #[test]
    fn load_requires_a_path() {
        assert_eq!(parse_line("load"), None);
        assert_eq!(
            parse_line("load resume.json"),
            Some(ParsedLine::Core(Msg::ResumeFilePicked("resume.json".into())))
        );
    }

    #[test]
    fn auto_apply_fields_are_pipe_separated() {
        let parsed = parse_line("autoapply key|Engineer|Berlin|+49 151|https://a.dev|10");
        let Some(ParsedLine::Core(Msg::AutoApplyRequested(params))) = parsed else {
            panic!("expected auto-apply params");
        };
        assert_eq!(params.api_key, "key");
        assert_eq!(params.job_title, "Engineer");
        assert_eq!(params.job_location, "Berlin");
        assert_eq!(params.max_applications, "10");
    }

    #[test]
    fn auto_apply_missing_fields_stay_empty() {
        let Some(ParsedLine::Core(Msg::AutoApplyRequested(params))) =
            parse_line("autoapply key|Engineer")
        else {
            panic!("expected auto-apply params");
        };
        assert_eq!(params.job_location, "");
        assert_eq!(params.user_website, "");
    }

    #[test]
    fn wait_parses_milliseconds() {
        assert_eq!(
            parse_line("wait 250"),
            Some(ParsedLine::Wait(Duration::from_millis(250)))
        );
        assert_eq!(parse_line("wait soon"), None);
    }
}
