pub mod client;
pub mod models;

pub use client::{TelegramClient, TelegramError};
pub use models::{Chat, TelegramMessage, TelegramUpdate};
