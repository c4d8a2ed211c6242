//! Pakistani-Rupee display formatting.

use crate::types::Money;

/// Format a monetary amount as "PKR 1,234,567.89".
///
/// Amounts are rounded to two decimal places; the sign sits between the
/// currency code and the digits.
pub fn format_pkr(amount: Money) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac_part = format!("{frac_part:0<2}");

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("PKR -{grouped}.{frac_part}")
    } else {
        format!("PKR {grouped}.{frac_part}")
    }
}
