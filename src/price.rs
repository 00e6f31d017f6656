//! Monetary value used by products and menus

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::error::KitchenError;

/// Decimal places kept by the price columns (half-up)
const DECIMAL_PLACES: u32 = 2;

/// Largest amount a `DECIMAL(19, 2)` price column holds: 99999999999999999.99
const MAX_PRICE: Decimal = Decimal::from_parts(2313682943, 2328306436, 0, false, 2);

/// Non-negative amount of money, rounded to cents.
///
/// Equality and ordering compare the decimal value, so `10` and `10.00`
/// are the same price.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    /// Validate and round to cents, so the value checked is the value stored.
    pub fn new(value: Decimal) -> Result<Self, KitchenError> {
        if value < Decimal::ZERO {
            return Err(KitchenError::InvalidPrice(value));
        }
        let rounded =
            value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        if rounded > MAX_PRICE {
            return Err(KitchenError::InvalidPrice(value));
        }
        Ok(Self(rounded))
    }

    /// Validate a price coming from a request body, where it may be absent.
    pub fn try_from_option(value: Option<Decimal>) -> Result<Self, KitchenError> {
        value
            .ok_or(KitchenError::MissingField("price"))
            .and_then(Self::new)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units. Quantities are validated as non-negative
    /// before they reach here.
    pub fn multiply(&self, quantity: i64) -> Result<Price, KitchenError> {
        self.0
            .checked_mul(Decimal::from(quantity))
            .map(Price)
            .ok_or(KitchenError::PriceOverflow)
    }

    pub fn checked_add(&self, other: Price) -> Result<Price, KitchenError> {
        self.0
            .checked_add(other.0)
            .map(Price)
            .ok_or(KitchenError::PriceOverflow)
    }

    pub fn is_greater_than(&self, other: &Price) -> bool {
        self.0 > other.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
