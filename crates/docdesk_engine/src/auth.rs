use std::time::Duration;

use desk_logging::desk_warn;

#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub endpoint: String,
    pub request_timeout: Duration,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000/login".to_string(),
            request_timeout: Duration::from_secs(15),
        }
    }
}

/// Credential check against the identity endpoint. Only the boolean
/// outcome matters to the client; protocol details stay behind this trait.
#[async_trait::async_trait]
pub trait CredentialCheck: Send + Sync {
    async fn check(&self, username: &str, password: &str) -> bool;
}

#[derive(Debug, Clone)]
pub struct HttpCredentialCheck {
    settings: AuthSettings,
}

impl HttpCredentialCheck {
    pub fn new(settings: AuthSettings) -> Self {
        Self { settings }
    }
}

#[async_trait::async_trait]
impl CredentialCheck for HttpCredentialCheck {
    async fn check(&self, username: &str, password: &str) -> bool {
        let client = match reqwest::Client::builder()
            .timeout(self.settings.request_timeout)
            .build()
        {
            Ok(client) => client,
            Err(err) => {
                desk_warn!("Could not build auth client: {}", err);
                return false;
            }
        };

        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        match client.post(&self.settings.endpoint).json(&body).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                desk_warn!("Credential check failed to reach {}: {}", self.settings.endpoint, err);
                false
            }
        }
    }
}
