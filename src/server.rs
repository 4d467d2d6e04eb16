//! HTTP surface: the Telegram webhook plus the JSON views the mini-app
//! renders.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::debug;

use crate::api::telegram::TelegramUpdate;
use crate::chain::ChainError;
use crate::commands::{self, BotContext};
use crate::services::{signer_service, transaction_service};

pub struct AppState {
    pub bot: BotContext,
    /// Bot token doubles as the webhook path secret.
    pub webhook_token: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/webhook/{token}", post(webhook))
        .route("/api/transactions", get(api_transactions))
        .route("/api/transactions/{id}", get(api_transaction_detail))
        .route("/api/signers", get(api_signers))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// Telegram webhook endpoint. Every well-formed update is acknowledged
/// with 200, whether or not it produced a reply.
async fn webhook(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
    Json(update): Json<TelegramUpdate>,
) -> StatusCode {
    if token != state.webhook_token {
        return StatusCode::NOT_FOUND;
    }
    debug!("webhook update: {:?}", update);
    commands::handle_update(&state.bot, &update).await;
    StatusCode::OK
}

async fn api_transactions(State(state): State<Arc<AppState>>) -> Response {
    match transaction_service::list_transactions(state.bot.multisig.as_ref()).await {
        Ok(list) => Json(list).into_response(),
        Err(e) => chain_error_response(e),
    }
}

async fn api_transaction_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Response {
    match transaction_service::transaction_detail(state.bot.multisig.as_ref(), id).await {
        Ok(detail) => Json(detail).into_response(),
        Err(e) => chain_error_response(e),
    }
}

async fn api_signers(State(state): State<Arc<AppState>>) -> Response {
    match signer_service::signer_overview(state.bot.multisig.as_ref()).await {
        Ok(overview) => Json(overview).into_response(),
        Err(e) => chain_error_response(e),
    }
}

fn chain_error_response(error: ChainError) -> Response {
    let status = match error {
        ChainError::UnknownTransaction(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_GATEWAY,
    };
    (status, Json(serde_json::json!({ "error": error.to_string() }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::telegram::{Chat, TelegramClient, TelegramMessage};
    use crate::chain::testing::FakeMultisig;
    use crate::chain::{Felt, MultisigApi};
    use axum::extract::Query;
    use primitive_types::U256;
    use std::collections::HashMap;
    use std::sync::atomic::Ordering;
    use std::time::Duration;
    use tokio::sync::mpsc;

    /// Minimal Bot API stand-in that records sendMessage query params.
    async fn spawn_mock_telegram() -> (String, mpsc::UnboundedReceiver<HashMap<String, String>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        // The client requests /bot<token>/sendMessage; the whole first
        // segment is captured since it has no slash of its own.
        let app = Router::new().route(
            "/{bot}/sendMessage",
            get(move |Query(params): Query<HashMap<String, String>>| {
                let tx = tx.clone();
                async move {
                    tx.send(params).ok();
                    Json(serde_json::json!({ "ok": true }))
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}", addr), rx)
    }

    fn state_with(api_url: &str, fake: Arc<FakeMultisig>) -> Arc<AppState> {
        let telegram =
            TelegramClient::with_api_url(api_url, "testtoken", Duration::from_secs(5)).unwrap();
        Arc::new(AppState {
            bot: BotContext {
                telegram,
                multisig: fake as Arc<dyn MultisigApi>,
                contract_address: Felt::from(0x769),
            },
            webhook_token: "testtoken".to_string(),
        })
    }

    fn update_with_text(text: &str) -> TelegramUpdate {
        TelegramUpdate {
            message: Some(TelegramMessage {
                chat: Chat { id: 7 },
                text: Some(text.to_string()),
            }),
        }
    }

    #[tokio::test]
    async fn test_webhook_without_message_is_a_no_op() {
        let (api_url, mut rx) = spawn_mock_telegram().await;
        let state = state_with(&api_url, Arc::new(FakeMultisig::default()));
        let status = webhook(
            State(state),
            Path("testtoken".to_string()),
            Json(TelegramUpdate::default()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_webhook_rejects_wrong_token() {
        let (api_url, _rx) = spawn_mock_telegram().await;
        let state = state_with(&api_url, Arc::new(FakeMultisig::default()));
        let status = webhook(
            State(state),
            Path("other".to_string()),
            Json(update_with_text("/help")),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_threshold_round_trip() {
        let (api_url, mut rx) = spawn_mock_telegram().await;
        let fake = Arc::new(FakeMultisig {
            threshold: 3,
            ..Default::default()
        });
        let state = state_with(&api_url, fake.clone());

        let status = webhook(
            State(state),
            Path("testtoken".to_string()),
            Json(update_with_text("/getThreshold")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fake.threshold_calls.load(Ordering::SeqCst), 1);

        let params = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(params.get("chat_id").unwrap(), "7");
        assert_eq!(params.get("parse_mode").unwrap(), "Markdown");
        assert!(params.get("text").unwrap().contains('3'));
        // Exactly one reply.
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_unrecognized_command_sends_no_reply() {
        let (api_url, mut rx) = spawn_mock_telegram().await;
        let state = state_with(&api_url, Arc::new(FakeMultisig::default()));
        for text in ["/frobnicate", "hello there", "/txInfo"] {
            let status = webhook(
                State(state.clone()),
                Path("testtoken".to_string()),
                Json(update_with_text(text)),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_api_transactions_serves_decoded_views() {
        let (api_url, _rx) = spawn_mock_telegram().await;
        let fake = Arc::new(FakeMultisig {
            signers: vec![U256::from(0x11)],
            threshold: 1,
            records: vec![crate::chain::TransactionRecord {
                to: U256::from(0xaaa),
                function_selector: U256::from(0x1u64),
                confirmations: 1,
                calldata: vec![],
            }],
            executed: vec![0],
            ..Default::default()
        });
        let state = state_with(&api_url, fake);
        let response = api_transactions(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_api_unknown_transaction_is_404() {
        let (api_url, _rx) = spawn_mock_telegram().await;
        let state = state_with(&api_url, Arc::new(FakeMultisig::default()));
        let response = api_transaction_detail(State(state), Path(9)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
