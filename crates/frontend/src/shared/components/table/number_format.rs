//! Number formatting for table cells (Indonesian style: `1.234.567,89`)

/// Thousands separated by `.`, decimals after `,`
/// Example: 1234.567 with 2 decimals -> "1.234,57"
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push('.');
        }
        result.push(*c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{},{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Whole numbers without decimals, anything else with two
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format_number_with_decimals(value, 0)
    } else {
        format_number_with_decimals(value, 2)
    }
}

/// Rupiah amount, rounded to whole rupiah
pub fn format_money(value: f64) -> String {
    format!("Rp {}", format_number_with_decimals(value, 0))
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number_with_decimals(value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1.235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1.234,6");
        assert_eq!(format_number_with_decimals(1234567.891, 2), "1.234.567,89");
        assert_eq!(format_number_with_decimals(-1234.0, 0), "-1.234");
        assert_eq!(format_number_with_decimals(-123.0, 0), "-123");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(12500000.0), "12.500.000");
        assert_eq!(format_number(2.5), "2,50");
    }

    #[test]
    fn test_money_and_percent() {
        assert_eq!(format_money(1250000.0), "Rp 1.250.000");
        assert_eq!(format_money(0.0), "Rp 0");
        assert_eq!(format_percent(-13.33), "-13,33%");
    }
}
