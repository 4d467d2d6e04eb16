use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use argonaut_bot::api::telegram::TelegramClient;
use argonaut_bot::chain::{felt, MultisigApi, RpcMultisig};
use argonaut_bot::commands::BotContext;
use argonaut_bot::config::Config;
use argonaut_bot::server::{self, AppState};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("argonaut_bot=debug".parse().unwrap())
                .add_directive("hyper=warn".parse().unwrap()),
        )
        .with_target(true)
        .init();

    info!("🚀 Starting Argonaut multisig bot...");

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return;
        }
    };
    info!(
        "Watching multisig contract {}",
        felt::to_hex64(config.contract_address)
    );

    let telegram = match TelegramClient::new(&config.telegram_token, config.http_timeout) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create Telegram client: {}", e);
            return;
        }
    };

    let multisig = match RpcMultisig::new(
        config.rpc_url.clone(),
        config.contract_address,
        config.http_timeout,
    ) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create RPC client: {}", e);
            return;
        }
    };

    let webhook_url = format!(
        "{}/webhook/{}",
        config.server_url.trim_end_matches('/'),
        config.telegram_token
    );
    match telegram.set_webhook(&webhook_url).await {
        Ok(()) => info!("Webhook registered"),
        Err(e) => warn!("Failed to register webhook: {}", e),
    }

    let state = Arc::new(AppState {
        bot: BotContext {
            telegram,
            multisig: Arc::new(multisig) as Arc<dyn MultisigApi>,
            contract_address: config.contract_address,
        },
        webhook_token: config.telegram_token.clone(),
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind port {}: {}", config.port, e);
            return;
        }
    };
    info!("Server is running on port {}", config.port);

    if let Err(e) = axum::serve(listener, server::router(state)).await {
        error!("Server error: {}", e);
    }
}
