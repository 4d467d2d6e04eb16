use std::time::Duration;

use reqwest::Client as HttpClient;
use thiserror::Error;
use tracing::debug;

use super::models::ApiResponse;

#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("Bot API error ({status}): {description}")]
    Api { status: u16, description: String },
}

/// Telegram Bot API client.
pub struct TelegramClient {
    http_client: HttpClient,
    base_url: String,
}

impl TelegramClient {
    const DEFAULT_API_URL: &'static str = "https://api.telegram.org";

    /// Create a client for the given bot token with an explicit request
    /// timeout.
    pub fn new(token: &str, timeout: Duration) -> Result<Self, TelegramError> {
        Self::with_api_url(Self::DEFAULT_API_URL, token, timeout)
    }

    /// Create a client against a custom API host (for testing).
    pub fn with_api_url(api_url: &str, token: &str, timeout: Duration) -> Result<Self, TelegramError> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TelegramError::Request(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            http_client,
            base_url: format!("{}/bot{}", api_url.trim_end_matches('/'), token),
        })
    }

    /// `GET sendMessage` with Markdown formatting.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), TelegramError> {
        let url = format!("{}/sendMessage", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("chat_id", chat_id.to_string().as_str()),
                ("text", text),
                ("parse_mode", "Markdown"),
            ])
            .send()
            .await
            .map_err(|e| TelegramError::Request(format!("sendMessage failed: {}", e)))?;
        Self::check_response(response).await
    }

    /// Register the webhook URL with the Bot API. Called once at startup.
    pub async fn set_webhook(&self, webhook_url: &str) -> Result<(), TelegramError> {
        let url = format!("{}/setWebhook", self.base_url);
        debug!("registering webhook at {}", webhook_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[("url", webhook_url)])
            .send()
            .await
            .map_err(|e| TelegramError::Request(format!("setWebhook failed: {}", e)))?;
        Self::check_response(response).await
    }

    async fn check_response(response: reqwest::Response) -> Result<(), TelegramError> {
        let status = response.status();
        let parsed: ApiResponse = response
            .json()
            .await
            .map_err(|e| TelegramError::Request(format!("failed to parse response: {}", e)))?;
        if !status.is_success() || !parsed.ok {
            return Err(TelegramError::Api {
                status: status.as_u16(),
                description: parsed
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            });
        }
        Ok(())
    }
}
