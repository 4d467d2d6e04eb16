//! JSON-RPC implementation of the read ABI
//!
//! Every read is a `starknet_call` against the configured node. No
//! caching: callers always see fresh chain state.

use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::api::{MultisigApi, TransactionRecord};
use super::error::ChainError;
use super::felt::{felt_to_u64, parse_felt, to_hex64, Felt};
use super::selector::entry_point_selector;
use async_trait::async_trait;

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<Vec<String>>,
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

/// Read-only multisig client backed by a Starknet JSON-RPC node.
pub struct RpcMultisig {
    http_client: HttpClient,
    rpc_url: String,
    contract_address: Felt,
}

impl RpcMultisig {
    /// Create a client with an explicit request timeout.
    pub fn new(
        rpc_url: String,
        contract_address: Felt,
        timeout: Duration,
    ) -> Result<Self, ChainError> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ChainError::Rpc(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            http_client,
            rpc_url,
            contract_address,
        })
    }

    /// Issue one `starknet_call` and return the raw felt array.
    async fn call(&self, entry_point: &str, calldata: &[Felt]) -> Result<Vec<Felt>, ChainError> {
        let selector = entry_point_selector(entry_point);
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "starknet_call",
            "params": {
                "request": {
                    "contract_address": to_hex64(self.contract_address),
                    "entry_point_selector": to_hex64(selector),
                    "calldata": calldata.iter().map(|f| to_hex64(*f)).collect::<Vec<_>>(),
                },
                "block_id": "latest",
            },
        });

        debug!("starknet_call {} with {} calldata felt(s)", entry_point, calldata.len());

        let response = self
            .http_client
            .post(&self.rpc_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ChainError::Rpc(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(ChainError::Rpc(format!(
                "node returned HTTP {}: {}",
                status, body_text
            )));
        }

        let parsed: RpcResponse = response
            .json()
            .await
            .map_err(|e| ChainError::Rpc(format!("failed to parse response: {}", e)))?;

        if let Some(err) = parsed.error {
            return Err(ChainError::Node {
                code: err.code,
                message: err.message,
            });
        }

        let result = parsed
            .result
            .ok_or_else(|| ChainError::Decode("response carries neither result nor error".to_string()))?;

        result.iter().map(|s| parse_felt(s)).collect()
    }

    /// Expect exactly one felt in the response.
    fn single(entry_point: &str, felts: Vec<Felt>) -> Result<Felt, ChainError> {
        if felts.len() != 1 {
            return Err(ChainError::Decode(format!(
                "{} returned {} felt(s), expected 1",
                entry_point,
                felts.len()
            )));
        }
        Ok(felts[0])
    }

    /// Parse a length-prefixed felt array.
    fn length_prefixed(entry_point: &str, felts: Vec<Felt>) -> Result<Vec<Felt>, ChainError> {
        let Some((len, rest)) = felts.split_first() else {
            return Err(ChainError::Decode(format!("{} returned an empty response", entry_point)));
        };
        let len = felt_to_u64(*len)? as usize;
        if rest.len() != len {
            return Err(ChainError::Decode(format!(
                "{} length prefix says {} but {} element(s) follow",
                entry_point,
                len,
                rest.len()
            )));
        }
        Ok(rest.to_vec())
    }
}

#[async_trait]
impl MultisigApi for RpcMultisig {
    async fn get_signers(&self) -> Result<Vec<Felt>, ChainError> {
        let felts = self.call("get_signers", &[]).await?;
        Self::length_prefixed("get_signers", felts)
    }

    async fn get_transactions_len(&self) -> Result<u64, ChainError> {
        let felts = self.call("get_transactions_len", &[]).await?;
        felt_to_u64(Self::single("get_transactions_len", felts)?)
    }

    async fn get_threshold(&self) -> Result<u64, ChainError> {
        let felts = self.call("get_threshold", &[]).await?;
        felt_to_u64(Self::single("get_threshold", felts)?)
    }

    async fn get_transaction(&self, id: u64) -> Result<TransactionRecord, ChainError> {
        let felts = self.call("get_transaction", &[Felt::from(id)]).await?;
        TransactionRecord::from_felts(&felts)
    }

    async fn is_executed(&self, id: u64) -> Result<u64, ChainError> {
        let felts = self.call("is_executed", &[Felt::from(id)]).await?;
        felt_to_u64(Self::single("is_executed", felts)?)
    }

    async fn is_confirmed(&self, id: u64, signer: Felt) -> Result<bool, ChainError> {
        let felts = self.call("is_confirmed", &[Felt::from(id), signer]).await?;
        Ok(felt_to_u64(Self::single("is_confirmed", felts)?)? == 1)
    }
}
