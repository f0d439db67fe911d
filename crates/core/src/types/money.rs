//! Display formatting for yen-denominated amounts.
//!
//! The catalog API prices products in whole yen; display grouping follows
//! the storefront convention ("¥1,000" rather than "¥1000").

use rust_decimal::Decimal;

/// Format an amount as a yen price string with thousands grouping.
///
/// Fractional digits are preserved when present but trailing zeros are
/// stripped, so `1000` formats as `"¥1,000"` and `1234.50` as `"¥1,234.5"`.
#[must_use]
pub fn format_yen(amount: Decimal) -> String {
    let normalized = amount.normalize();
    let text = normalized.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let digits = int_part.len();
    let mut grouped = String::with_capacity(digits + digits / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (digits - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if normalized.is_sign_negative() { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("¥{sign}{grouped}.{frac}"),
        None => format!("¥{sign}{grouped}"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_yen_zero() {
        assert_eq!(format_yen(Decimal::ZERO), "¥0");
    }

    #[test]
    fn test_format_yen_small() {
        assert_eq!(format_yen(Decimal::from(750)), "¥750");
    }

    #[test]
    fn test_format_yen_grouping() {
        assert_eq!(format_yen(Decimal::from(1000)), "¥1,000");
        assert_eq!(format_yen(Decimal::from(1_234_567)), "¥1,234,567");
    }

    #[test]
    fn test_format_yen_fractional() {
        let amount: Decimal = "1234.5".parse().unwrap();
        assert_eq!(format_yen(amount), "¥1,234.5");
    }

    #[test]
    fn test_format_yen_strips_trailing_zeros() {
        let amount: Decimal = "1000.00".parse().unwrap();
        assert_eq!(format_yen(amount), "¥1,000");
    }
}
