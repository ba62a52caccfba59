use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid money amount {0:?}: expected digits, a dot, and exactly two cent digits")]
    InvalidMoney(String),

    #[error("money amount {0:?} is out of range")]
    MoneyOutOfRange(String),

    #[error("invalid receipt id {0:?}: not a v4 UUID")]
    InvalidReceiptId(String),
}
