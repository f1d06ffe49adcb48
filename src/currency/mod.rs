//! Amount formatting for the single implicit currency.

const PRECISION: usize = 2;
const GROUPING_SEPARATOR: char = ',';

/// Formats `value` as `<symbol><grouped digits>.<cents>`, ignoring its sign.
pub fn format_amount(symbol: &str, value: f64) -> String {
    format!("{}{}", symbol, format_number(value.abs()))
}

/// Formats an amount with a leading `+`/`-` marker.
pub fn format_signed(symbol: &str, sign: char, value: f64) -> String {
    format!("{}{}", sign, format_amount(symbol, value))
}

pub fn format_number(value: f64) -> String {
    let body = format!("{:.*}", PRECISION, value);
    let (int_part, fraction) = match body.find('.') {
        Some(pos) => body.split_at(pos),
        None => (body.as_str(), ""),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    format!("{}{}{}", sign, group_digits(digits), fraction)
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, GROUPING_SEPARATOR);
        }
        grouped.insert(0, ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(3500.0), "3,500.00");
        assert_eq!(format_number(1234567.891), "1,234,567.89");
        assert_eq!(format_number(85.0), "85.00");
        assert_eq!(format_number(-1200.5), "-1,200.50");
    }

    #[test]
    fn amount_drops_sign_and_signed_adds_marker() {
        assert_eq!(format_amount("$", -15.5), "$15.50");
        assert_eq!(format_signed("$", '+', 3500.0), "+$3,500.00");
    }
}
