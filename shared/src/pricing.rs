//! Discount calculation using rust_decimal for precision
//!
//! Prices travel as `f64` on the wire and in the store; arithmetic is done in
//! `Decimal` and converted back.

use rust_decimal::prelude::*;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Price after applying a percentage discount.
///
/// A discount that is not strictly positive leaves the price untouched. The
/// result never goes below zero, even for discounts above 100.
pub fn discounted_price(price: f64, discount: f64) -> f64 {
    if discount.is_nan() || discount <= 0.0 {
        return price;
    }

    let price_dec = to_decimal(price);
    let discount_dec = to_decimal(discount);
    let off = price_dec * discount_dec / Decimal::ONE_HUNDRED;

    (price_dec - off)
        .max(Decimal::ZERO)
        .to_f64()
        .unwrap_or_default()
}

/// Whether a discount should be shown (original price struck through)
#[inline]
pub fn has_discount(discount: f64) -> bool {
    discount > 0.0
}
