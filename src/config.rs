//! Environment configuration
//!
//! Everything tunable lives here, including the fee caps attached to
//! state-changing calls, so deployments can retune them without touching
//! code.

use std::time::Duration;

use thiserror::Error;

use crate::chain::felt::{parse_felt, Felt};
use crate::chain::FeePolicy;

const DEFAULT_RPC_URL: &str = "https://free-rpc.nethermind.io/sepolia-juno";
const DEFAULT_CONTRACT_ADDRESS: &str =
    "0x0769541b749506a33525e4fef21f9772ef51380a72818c8b88678ef359db16da";
/// Canonical ETH ERC-20 contract on Starknet.
const DEFAULT_ETH_TOKEN_ADDRESS: &str =
    "0x049d36570d4e46f48e99674bd3fcc84644ddd6b96f7c741b1562b82f9e004dc7";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_FEE_GAS: u64 = 5_000;
const DEFAULT_MAX_FEE_GAS_PRICE: u128 = 200_000_000_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_token: String,
    /// Public base URL this service is reachable at, used once to
    /// register the webhook.
    pub server_url: String,
    pub port: u16,
    pub rpc_url: String,
    pub contract_address: Felt,
    pub eth_token_address: Felt,
    pub fee: FeePolicy,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let telegram_token =
            std::env::var("TELEGRAM_TOKEN").map_err(|_| ConfigError::Missing("TELEGRAM_TOKEN"))?;
        let server_url =
            std::env::var("SERVER_URL").map_err(|_| ConfigError::Missing("SERVER_URL"))?;

        Ok(Self {
            telegram_token,
            server_url,
            port: parse_var("PORT", DEFAULT_PORT)?,
            rpc_url: var_or("STARKNET_RPC_URL", DEFAULT_RPC_URL),
            contract_address: felt_var("CONTRACT_ADDRESS", DEFAULT_CONTRACT_ADDRESS)?,
            eth_token_address: felt_var("ETH_TOKEN_ADDRESS", DEFAULT_ETH_TOKEN_ADDRESS)?,
            fee: FeePolicy {
                max_gas_amount: parse_var("MAX_FEE_GAS", DEFAULT_MAX_FEE_GAS)?,
                max_gas_price: parse_var("MAX_FEE_GAS_PRICE", DEFAULT_MAX_FEE_GAS_PRICE)?,
            },
            http_timeout: Duration::from_secs(parse_var(
                "HTTP_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            )?),
        })
    }
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

fn felt_var(name: &'static str, default: &str) -> Result<Felt, ConfigError> {
    let raw = var_or(name, default);
    parse_felt(&raw).map_err(|e| ConfigError::Invalid {
        name,
        reason: e.to_string(),
    })
}
