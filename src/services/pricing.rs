//! Money arithmetic for purchase lines. Values are multiplied and summed as-is;
//! no rounding step is applied anywhere.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("amount out of range for {quantity} x {unit_price}")]
    Overflow { unit_price: Decimal, quantity: i32 },

    #[error("order total out of range")]
    TotalOverflow,
}

/// `unit_price * quantity`. Zero and negative quantities are priced like any other.
pub fn line_subtotal(unit_price: Decimal, quantity: i32) -> Result<Decimal, PricingError> {
    unit_price
        .checked_mul(Decimal::from(quantity))
        .ok_or(PricingError::Overflow {
            unit_price,
            quantity,
        })
}

pub fn order_total<I>(subtotals: I) -> Result<Decimal, PricingError>
where
    I: IntoIterator<Item = Decimal>,
{
    subtotals
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, subtotal| acc.checked_add(subtotal))
        .ok_or(PricingError::TotalOverflow)
}
