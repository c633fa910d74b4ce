use std::path::Path;

use applyflow_client::AtomicFileWriter;
use chrono::Utc;
use client_logging::{client_error, client_info};
use serde::{Deserialize, Serialize};

const SESSION_FILENAME: &str = ".applyflow_session.ron";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredSession {
    auth_token: String,
    stored_at: String,
}

/// Persist the auth token from a successful login.
///
/// Write-only: nothing in this front end reads the session back; it exists
/// for later authenticated requests.
pub(crate) fn save_auth_token(state_dir: &Path, token: &str) {
    let session = StoredSession {
        auth_token: token.to_string(),
        stored_at: Utc::now().to_rfc3339(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&session, pretty) {
        Ok(text) => text,
        Err(err) => {
            client_error!("Failed to serialize session state: {}", err);
            return;
        }
    };

    let writer = AtomicFileWriter::new(state_dir.to_path_buf());
    match writer.write(SESSION_FILENAME, &content) {
        Ok(path) => client_info!("Stored auth token at {:?}", path),
        Err(err) => {
            client_error!("Failed to write session state to {:?}: {}", state_dir, err);
        }
    }
}
