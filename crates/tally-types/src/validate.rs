use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::money::Money;
use crate::receipt::Receipt;

/// A receipt failed structural validation.
///
/// Validation is all-or-nothing; the first failing constraint wins and the
/// message names the offending field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("purchaseDate {0:?} is not a valid YYYY-MM-DD date")]
    InvalidDate(String),

    #[error("purchaseTime {0:?} is not a valid 24-hour HH:MM time")]
    InvalidTime(String),

    #[error("total {0:?} is not a valid decimal amount with two cent digits")]
    InvalidTotal(String),

    #[error("items must contain at least one item")]
    NoItems,

    #[error("items[{index}].shortDescription must not be empty")]
    EmptyDescription { index: usize },

    #[error("items[{index}].price {price:?} is not a valid decimal amount with two cent digits")]
    InvalidPrice { index: usize, price: String },
}

/// Validate a decoded receipt against the submission contract.
///
/// Checks, in order: non-empty `retailer`, parseable `purchaseDate` and
/// `purchaseTime`, parseable `total`, at least one item, and per-item
/// non-empty description plus parseable price. Field emptiness is judged
/// after trimming, so whitespace-only values are rejected too.
pub fn validate(receipt: &Receipt) -> Result<(), ValidationError> {
    if receipt.retailer.trim().is_empty() {
        return Err(ValidationError::EmptyField("retailer"));
    }

    if receipt.purchase_date.trim().is_empty() {
        return Err(ValidationError::EmptyField("purchaseDate"));
    }
    // chrono accepts single-digit month/day, so pin the shape first.
    let date = receipt.purchase_date.as_str();
    if date.len() != 10
        || NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err()
    {
        return Err(ValidationError::InvalidDate(receipt.purchase_date.clone()));
    }

    if receipt.purchase_time.trim().is_empty() {
        return Err(ValidationError::EmptyField("purchaseTime"));
    }
    let time = receipt.purchase_time.as_str();
    if time.len() != 5
        || NaiveTime::parse_from_str(time, "%H:%M").is_err()
    {
        return Err(ValidationError::InvalidTime(receipt.purchase_time.clone()));
    }

    if receipt.total.trim().is_empty() {
        return Err(ValidationError::EmptyField("total"));
    }
    if receipt.total.parse::<Money>().is_err() {
        return Err(ValidationError::InvalidTotal(receipt.total.clone()));
    }

    if receipt.items.is_empty() {
        return Err(ValidationError::NoItems);
    }
    for (index, item) in receipt.items.iter().enumerate() {
        if item.short_description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription { index });
        }
        if item.price.parse::<Money>().is_err() {
            return Err(ValidationError::InvalidPrice {
                index,
                price: item.price.clone(),
            });
        }
    }

    Ok(())
}
