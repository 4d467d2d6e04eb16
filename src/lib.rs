//! Thin client for the Argonaut Starknet multisig: a Telegram webhook
//! bot plus the JSON views its companion mini-app renders. All multisig
//! semantics live in the contract; this crate fetches, decodes and
//! presents.

pub mod api;
pub mod chain;
pub mod commands;
pub mod config;
pub mod models;
pub mod presenter;
pub mod server;
pub mod services;
pub mod utils;
