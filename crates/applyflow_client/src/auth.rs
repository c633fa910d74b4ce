use std::time::Duration;

use reqwest::header::CONTENT_TYPE;

use crate::{AuthError, AuthFailureKind, LoginRequest, LoginResponse};

/// Path of the authentication endpoint, relative to the configured base.
pub const LOGIN_PATH: &str = "/api/login";

#[derive(Debug, Clone)]
pub struct AuthSettings {
    /// Base URL of the backend, e.g. `http://127.0.0.1:8000`.
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait LoginApi: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AuthError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestLoginApi {
    settings: AuthSettings,
}

impl ReqwestLoginApi {
    pub fn new(settings: AuthSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, AuthError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| AuthError::new(AuthFailureKind::Network, err.to_string()))
    }

    fn login_url(&self) -> String {
        format!(
            "{}{}",
            self.settings.endpoint.trim_end_matches('/'),
            LOGIN_PATH
        )
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    let ct = content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim();
    ct.eq_ignore_ascii_case("application/json")
}

#[async_trait::async_trait]
impl LoginApi for ReqwestLoginApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AuthError> {
        let client = self.build_client()?;

        let response = client
            .post(self.login_url())
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();

        // A JSON content type is required before the body is touched,
        // regardless of status.
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        match content_type.as_deref() {
            Some(ct) if is_json_content_type(ct) => {}
            _ => {
                return Err(AuthError::new(
                    AuthFailureKind::NonJsonResponse { content_type },
                    "server returned a non-json response",
                ));
            }
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        let body: LoginResponse = serde_json::from_slice(&bytes)
            .map_err(|err| AuthError::new(AuthFailureKind::InvalidJson, err.to_string()))?;

        if !status.is_success() {
            return Err(AuthError::new(
                AuthFailureKind::Rejected {
                    status: status.as_u16(),
                    message: body.message,
                },
                status.to_string(),
            ));
        }

        Ok(body)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> AuthError {
    if err.is_timeout() {
        return AuthError::new(AuthFailureKind::Timeout, err.to_string());
    }
    AuthError::new(AuthFailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::is_json_content_type;

    #[test]
    fn json_content_type_matching_ignores_parameters_and_case() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("application/json; charset=utf-8"));
        assert!(is_json_content_type("Application/JSON"));
        assert!(!is_json_content_type("text/html"));
        assert!(!is_json_content_type("application/json-seq"));
    }
}
