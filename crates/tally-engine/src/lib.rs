//! Pure scoring engine for Receipt Tally.
//!
//! [`score`] maps a validated [`Receipt`] to its points total: the sum of
//! seven independent, additive rules. Each rule is a small pure function;
//! order never affects the result. Monetary rules run on integer cents via
//! [`tally_types::Money`], never on binary floats.
//!
//! The engine re-parses the receipt's date, time, and amounts. For a
//! receipt that passed validation these parses cannot fail; a failure here
//! means the stored record is corrupt and surfaces as [`ScoreError`] rather
//! than being silently ignored.

pub mod rules;

use thiserror::Error;

use tally_types::Receipt;

/// A stored receipt field no longer parses.
///
/// This is a defect check: validation guarantees these fields parse at
/// submission time, and records are immutable after that.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    #[error("stored purchaseDate {0:?} is unparseable")]
    BadDate(String),

    #[error("stored purchaseTime {0:?} is unparseable")]
    BadTime(String),

    #[error("stored amount {0:?} is unparseable")]
    BadAmount(String),
}

/// Compute the points total for a receipt.
///
/// Deterministic and non-negative for every valid receipt.
pub fn score(receipt: &Receipt) -> Result<u64, ScoreError> {
    Ok(rules::retailer_alphanumerics(receipt)
        + rules::round_dollar_bonus(receipt)?
        + rules::quarter_multiple_bonus(receipt)?
        + rules::item_pair_bonus(receipt)
        + rules::description_length_bonus(receipt)?
        + rules::odd_day_bonus(receipt)?
        + rules::afternoon_bonus(receipt)?)
}
