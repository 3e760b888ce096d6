/// Result of coercing free-form text into a number.
///
/// Invalid input never gets rejected: it becomes `0.0` and carries a message
/// that the form shows next to the field.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedNumber {
    pub value: f64,
    pub message: Option<String>,
}

impl ParsedNumber {
    fn valid(value: f64) -> Self {
        Self {
            value,
            message: None,
        }
    }

    fn coerced(message: impl Into<String>) -> Self {
        Self {
            value: 0.0,
            message: Some(message.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.message.is_none()
    }
}

pub fn parse_number(s: &str) -> ParsedNumber {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return ParsedNumber::valid(0.0);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => ParsedNumber::valid(value),
        _ => ParsedNumber::coerced(format!("'{trimmed}' is not a number")),
    }
}

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

/// Plain number for an input buffer: `15`, `12.5`.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Renders a percentage without a trailing `.0` for whole numbers.
pub fn format_percentage(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}%")
    } else {
        format!("{value:.2}%")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("100", 100.0)]
    #[case(" 12.5 ", 12.5)]
    #[case("", 0.0)]
    #[case("-3", -3.0)]
    fn test_parse_number_valid(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(parse_number(input), ParsedNumber::valid(expected));
    }

    #[rstest]
    #[case("abc")]
    #[case("12abc")]
    #[case("NaN")]
    #[case("inf")]
    fn test_parse_number_coerces_to_zero(#[case] input: &str) {
        let parsed = parse_number(input);
        assert_eq!(parsed.value, 0.0);
        assert!(!parsed.is_valid());
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(55.0), 55.0);
        assert_eq!(round_cents(33.333_333), 33.33);
        assert_eq!(round_cents(16.666_666), 16.67);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(55.0), "55.00");
        assert_eq!(format_amount(0.1 + 0.2), "0.30");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(15.0), "15");
        assert_eq!(format_number(12.5), "12.5");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(50.0), "50%");
        assert_eq!(format_percentage(33.5), "33.50%");
    }
}
