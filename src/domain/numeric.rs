use rust_decimal::Decimal;

/// Rounds half to even to `decimal_places` and pads with trailing zeros,
/// so `0.07` quantized to 8 places displays as `0.07000000`.
pub fn quantize(value: Decimal, decimal_places: u32) -> Decimal {
    let mut rounded = value.round_dp(decimal_places);
    rounded.rescale(decimal_places);
    rounded
}

/// Formats a dollar amount with thousands separators and two decimals, e.g. `$1,234,567.89`
pub fn format_usd(value: Decimal) -> String {
    let rounded = quantize(value.abs(), 2).to_string();
    let (whole, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value.is_sign_negative() && !value.is_zero() { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn quantize_pads_and_rounds_half_even() {
        assert_eq!(quantize(dec!(0.07), 8).to_string(), "0.07000000");
        assert_eq!(quantize(dec!(73.525), 2).to_string(), "73.52");
        assert_eq!(quantize(dec!(73.535), 2).to_string(), "73.54");
        assert_eq!(quantize(dec!(100), 2).to_string(), "100.00");
    }

    #[test]
    fn format_usd_groups_thousands() {
        assert_eq!(format_usd(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(format_usd(dec!(999)), "$999.00");
        assert_eq!(format_usd(dec!(1000)), "$1,000.00");
        assert_eq!(format_usd(dec!(0.5)), "$0.50");
        assert_eq!(format_usd(dec!(-2500.1)), "-$2,500.10");
    }
}
