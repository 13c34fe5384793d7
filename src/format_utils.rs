/// Price label with two fraction digits and comma thousands separators,
/// e.g. `67234.12` -> `67,234.12`.
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return price.to_string();
    }
    let fixed = format!("{:.2}", price.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if price < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, group_thousands(whole), fraction)
}

/// Change label: two fraction digits, `+` for values >= 0, always a `%` suffix.
pub fn format_change(change_percent: f64) -> String {
    if change_percent >= 0.0 {
        // abs() folds -0.0 into +0.00
        format!("+{:.2}%", change_percent.abs())
    } else {
        format!("{:.2}%", change_percent)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_only_the_integer_part() {
        assert_eq!(format_price(1234567.891), "1,234,567.89");
        assert_eq!(format_price(999.999), "1,000.00");
        assert_eq!(format_price(12.5), "12.50");
        assert_eq!(format_price(-4321.0), "-4,321.00");
    }

    #[test]
    fn change_sign_follows_value() {
        assert_eq!(format_change(2.346), "+2.35%");
        assert_eq!(format_change(0.0), "+0.00%");
        assert_eq!(format_change(-0.0), "+0.00%");
        assert_eq!(format_change(-1.23), "-1.23%");
    }
}
