//! The seven scoring rules.
//!
//! Each rule inspects one aspect of the receipt and returns the points it
//! contributes. Rules are independent; [`crate::score`] sums them.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use tally_types::{Money, Receipt};

use crate::ScoreError;

fn parse_amount(s: &str) -> Result<Money, ScoreError> {
    s.parse().map_err(|_| ScoreError::BadAmount(s.to_string()))
}

fn parse_date(receipt: &Receipt) -> Result<NaiveDate, ScoreError> {
    NaiveDate::parse_from_str(&receipt.purchase_date, "%Y-%m-%d")
        .map_err(|_| ScoreError::BadDate(receipt.purchase_date.clone()))
}

fn parse_time(receipt: &Receipt) -> Result<NaiveTime, ScoreError> {
    NaiveTime::parse_from_str(&receipt.purchase_time, "%H:%M")
        .map_err(|_| ScoreError::BadTime(receipt.purchase_time.clone()))
}

/// Rule 1: one point per alphanumeric character in the retailer name.
pub fn retailer_alphanumerics(receipt: &Receipt) -> u64 {
    receipt
        .retailer
        .chars()
        .filter(|c| c.is_alphanumeric())
        .count() as u64
}

/// Rule 2: 50 points if the total is a round dollar amount.
pub fn round_dollar_bonus(receipt: &Receipt) -> Result<u64, ScoreError> {
    let total = parse_amount(&receipt.total)?;
    Ok(if total.is_round_dollar() { 50 } else { 0 })
}

/// Rule 3: 25 points if the total is a multiple of 0.25.
pub fn quarter_multiple_bonus(receipt: &Receipt) -> Result<u64, ScoreError> {
    let total = parse_amount(&receipt.total)?;
    Ok(if total.is_quarter_multiple() { 25 } else { 0 })
}

/// Rule 4: 5 points for every two items.
pub fn item_pair_bonus(receipt: &Receipt) -> u64 {
    (receipt.items.len() as u64 / 2) * 5
}

/// Rule 5: for each item whose trimmed description length is a non-zero
/// multiple of 3, add `ceil(price * 0.2)`.
pub fn description_length_bonus(receipt: &Receipt) -> Result<u64, ScoreError> {
    let mut points = 0;
    for item in &receipt.items {
        let len = item.short_description.trim().chars().count();
        if len > 0 && len % 3 == 0 {
            points += parse_amount(&item.price)?.ceil_fifth();
        }
    }
    Ok(points)
}

/// Rule 6: 6 points if the day of the month is odd.
pub fn odd_day_bonus(receipt: &Receipt) -> Result<u64, ScoreError> {
    let date = parse_date(receipt)?;
    Ok(if date.day() % 2 == 1 { 6 } else { 0 })
}

/// Rule 7: 10 points if the purchase time is strictly after 14:00 and
/// strictly before 16:00. The endpoints themselves earn nothing; 14:01
/// through 15:59 all qualify.
pub fn afternoon_bonus(receipt: &Receipt) -> Result<u64, ScoreError> {
    let time = parse_time(receipt)?;
    let minutes = time.hour() * 60 + time.minute();
    Ok(if minutes > 14 * 60 && minutes < 16 * 60 { 10 } else { 0 })
}
