//! Foundation types for Receipt Tally.
//!
//! This crate provides the wire-level receipt types, the fixed-point money
//! type, the v4-UUID receipt identifier, and the receipt validator. Every
//! other tally crate depends on `tally-types`.
//!
//! # Key Types
//!
//! - [`Receipt`] / [`Item`] — the submitted purchase record
//! - [`ReceiptId`] — random v4 UUID assigned to each stored receipt
//! - [`Money`] — integer-cents fixed point; monetary rule checks never touch
//!   binary floats
//! - [`validate`] — all-or-nothing structural validation with field-naming
//!   errors

pub mod error;
pub mod money;
pub mod receipt;
pub mod validate;

pub use error::TypeError;
pub use money::Money;
pub use receipt::{Item, Receipt, ReceiptId};
pub use validate::{validate, ValidationError};
