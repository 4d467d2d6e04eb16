pub mod action_service;
pub mod session;
pub mod signer_service;
pub mod transaction_service;

pub use session::Session;
