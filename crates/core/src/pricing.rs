//! Sale-price and discount math for product display.
//!
//! A product is on sale when its sale price is set, positive, and strictly
//! below the regular price; a zero or missing sale price never discounts.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Whether a sale price actually discounts the regular price.
#[must_use]
pub fn is_on_sale(price: Decimal, sale_price: Option<Decimal>) -> bool {
    sale_price.is_some_and(|sale| sale > Decimal::ZERO && sale < price)
}

/// The price actually charged: the sale price when it discounts, else the
/// regular price.
#[must_use]
pub fn effective_price(price: Decimal, sale_price: Option<Decimal>) -> Decimal {
    match sale_price {
        Some(sale) if sale > Decimal::ZERO && sale < price => sale,
        _ => price,
    }
}

/// Discount as a whole percentage, rounded half away from zero.
///
/// `discount_percent(1000, 750)` is `25`. Returns 0 for a non-positive
/// regular price.
#[must_use]
pub fn discount_percent(price: Decimal, sale_price: Decimal) -> u32 {
    if price <= Decimal::ZERO {
        return 0;
    }
    ((price - sale_price) / price * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_price_on_sale() {
        let price = Decimal::from(1000);
        let sale = Some(Decimal::from(750));
        assert!(is_on_sale(price, sale));
        assert_eq!(effective_price(price, sale), Decimal::from(750));
    }

    #[test]
    fn test_effective_price_without_sale() {
        let price = Decimal::from(1000);
        assert!(!is_on_sale(price, None));
        assert_eq!(effective_price(price, None), price);
    }

    #[test]
    fn test_sale_price_at_or_above_price_is_not_a_sale() {
        let price = Decimal::from(1000);
        assert!(!is_on_sale(price, Some(Decimal::from(1000))));
        assert!(!is_on_sale(price, Some(Decimal::from(1200))));
        assert_eq!(effective_price(price, Some(Decimal::from(1200))), price);
    }

    #[test]
    fn test_zero_sale_price_is_not_a_sale() {
        let price = Decimal::from(1000);
        assert!(!is_on_sale(price, Some(Decimal::ZERO)));
        assert_eq!(effective_price(price, Some(Decimal::ZERO)), price);
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(discount_percent(Decimal::from(1000), Decimal::from(750)), 25);
        assert_eq!(discount_percent(Decimal::from(100), Decimal::from(50)), 50);
    }

    #[test]
    fn test_discount_percent_rounds_half_up() {
        // (100 - 66.5) / 100 * 100 = 33.5 -> 34
        let sale: Decimal = "66.5".parse().unwrap();
        assert_eq!(discount_percent(Decimal::from(100), sale), 34);
    }

    #[test]
    fn test_discount_percent_zero_price() {
        assert_eq!(discount_percent(Decimal::ZERO, Decimal::from(10)), 0);
    }
}
