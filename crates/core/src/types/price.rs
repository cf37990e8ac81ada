//! Type-safe price representation using decimal arithmetic.
//!
//! Feed prices arrive as currency-prefixed strings (e.g. `"R12.99"`).
//! Parsing is centralized here so every caller gets the same behavior:
//! strip the leading rand marker, parse the remainder as a decimal, and
//! fail with a typed error on malformed text instead of computing a
//! garbage total.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Currency marker prefixed to every feed price.
const CURRENCY_MARKER: char = 'R';

/// Errors that can occur when parsing price text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    /// Price text is empty after stripping the currency marker.
    #[error("empty price text")]
    Empty,

    /// Price text is not a valid decimal number.
    #[error("malformed price text: {0:?}")]
    Malformed(String),
}

/// A rand amount parsed from feed price text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Parse currency-prefixed price text (e.g. `"R12.99"`).
    ///
    /// The leading currency marker is optional; `"12.99"` parses too.
    ///
    /// # Errors
    ///
    /// Returns `PriceError` if the text is empty or not a decimal number.
    pub fn parse(text: &str) -> Result<Self, PriceError> {
        let trimmed = text.trim();
        let amount_text = trimmed.strip_prefix(CURRENCY_MARKER).unwrap_or(trimmed).trim();

        if amount_text.is_empty() {
            return Err(PriceError::Empty);
        }

        amount_text
            .parse::<Decimal>()
            .map(Self)
            .map_err(|_| PriceError::Malformed(text.to_owned()))
    }

    /// The decimal amount in rand.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:.2}", CURRENCY_MARKER, self.0)
    }
}
