pub mod format;
pub mod validate;

pub use format::format_eth;
pub use validate::{parse_amount_eth, parse_receiver, ValidationError};
