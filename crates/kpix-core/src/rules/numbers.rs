//! Swedish number parsing and formatting ("8 232 000", "3,50").

use super::patterns::NUMBER_TOKEN;
use crate::error::ParseError;

/// Parse a Swedish-formatted number (e.g., "10 000", "3,00", "1 234,56").
pub fn parse_number(text: &str) -> Result<f64, ParseError> {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, ' ' | '\u{00a0}' | '\u{202f}'))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    cleaned
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| ParseError::new(text))
}

/// Format a number in Swedish style: "8 232 000" for whole numbers, "1 234,56" otherwise.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let abs = value.abs();
    let formatted = if abs.fract() == 0.0 {
        group_thousands(&format!("{:.0}", abs))
    } else {
        let s = format!("{:.2}", abs);
        match s.split_once('.') {
            Some((integer_part, decimal_part)) => {
                format!("{},{}", group_thousands(integer_part), decimal_part)
            }
            None => s,
        }
    };

    if value < 0.0 {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// First complete number in a line holding several ("10 000 10 000 0 0 0" -> "10 000").
pub fn first_number_token(line: &str) -> Option<String> {
    let line = line.replace('\u{00a0}', " ");
    NUMBER_TOKEN
        .find(line.trim())
        .map(|m| m.as_str().trim().to_string())
}

fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut formatted = String::with_capacity(chars.len() + chars.len() / 3);

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push(' ');
        }
        formatted.push(*c);
    }

    formatted
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("10 000"), Ok(10_000.0));
        assert_eq!(parse_number("3,00"), Ok(3.0));
        assert_eq!(parse_number("8\u{00a0}232\u{00a0}000"), Ok(8_232_000.0));
        assert_eq!(parse_number(" 1 234,56 "), Ok(1234.56));
        assert_eq!(parse_number("4"), Ok(4.0));
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        assert_eq!(parse_number(""), Err(ParseError::new("")));
        assert!(parse_number("1-4").is_err());
        assert!(parse_number("Ja").is_err());
        assert!(parse_number("inf").is_err());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(8_232_000.0), "8 232 000");
        assert_eq!(format_number(3.5), "3,50");
        assert_eq!(format_number(1234.56), "1 234,56");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(-1500.0), "-1 500");
    }

    #[test]
    fn test_format_parse_round_trip() {
        for x in [0.0, 3.5, 8_232_000.0, 37_240.0, 1234.56, 0.25] {
            assert_eq!(parse_number(&format_number(x)), Ok(x));
        }
    }

    #[test]
    fn test_first_number_token() {
        assert_eq!(first_number_token("10 000 10 000 0 0 0").as_deref(), Some("10 000"));
        assert_eq!(first_number_token("3,00 extra text").as_deref(), Some("3,00"));
        assert_eq!(first_number_token("  1\u{00a0}900 KSEK").as_deref(), Some("1 900"));
        assert_eq!(first_number_token("inga siffror"), None);
    }
}
