//! Conversion between textual integers and `BigUint`.
//!
//! Command-line values follow the usual literal conventions: `0x`, `0o` and `0b`
//! prefixes select the base, anything else is decimal. Group and vector files hold
//! bare hexadecimal that may be wrapped over several lines, so they go through
//! [`parse_hex_digits`] instead.

use num_bigint::BigUint;
use num_traits::Num;

use crate::error::{Error, Result};

/// Parses a hexadecimal (`0x`), octal (`0o`), binary (`0b`) or decimal integer.
///
/// Surrounding whitespace is ignored and `_` may separate digits.
///
/// # Examples
/// ```
/// use modp_dh::parse::parse_biguint;
/// use num_bigint::BigUint;
///
/// assert_eq!(parse_biguint("0x3f1").unwrap(), BigUint::from(1009u32));
/// assert_eq!(parse_biguint("1_009").unwrap(), BigUint::from(1009u32));
/// assert!(parse_biguint("0x3g1").is_err());
/// ```
pub fn parse_biguint(text: &str) -> Result<BigUint> {
    let trimmed = text.trim();
    let (radix, body) = split_radix_prefix(trimmed);
    parse_digits(text, body, radix)
}

/// Parses unprefixed hexadecimal digits, ignoring all whitespace.
///
/// A leading `0x` is tolerated so that files written by [`to_hex`] read back.
pub fn parse_hex_digits(text: &str) -> Result<BigUint> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let body = compact
        .strip_prefix("0x")
        .or_else(|| compact.strip_prefix("0X"))
        .unwrap_or(&compact);
    parse_digits(text, body, 16)
}

/// Renders `value` as lowercase hexadecimal with a `0x` prefix.
pub fn to_hex(value: &BigUint) -> String {
    format!("{value:#x}")
}

fn split_radix_prefix(text: &str) -> (u32, &str) {
    match text.get(..2) {
        Some("0x") | Some("0X") => (16, &text[2..]),
        Some("0o") | Some("0O") => (8, &text[2..]),
        Some("0b") | Some("0B") => (2, &text[2..]),
        _ => (10, text),
    }
}

fn parse_digits(input: &str, body: &str, radix: u32) -> Result<BigUint> {
    if body.is_empty() {
        return Err(Error::format(input, "no digits"));
    }
    if body.starts_with('_') || body.ends_with('_') || body.contains("__") {
        return Err(Error::format(input, "misplaced digit separator"));
    }
    if let Some(c) = body.chars().find(|&c| c != '_' && !c.is_digit(radix)) {
        return Err(Error::format(
            input,
            format!("{c:?} is not a base-{radix} digit"),
        ));
    }

    let digits: String = body.chars().filter(|&c| c != '_').collect();
    BigUint::from_str_radix(&digits, radix).map_err(|e| Error::format(input, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_prefixed_bases() {
        assert_eq!(parse_biguint("0x107").unwrap(), big(263));
        assert_eq!(parse_biguint("0X107").unwrap(), big(263));
        assert_eq!(parse_biguint("0o407").unwrap(), big(263));
        assert_eq!(parse_biguint("0b100000111").unwrap(), big(263));
        assert_eq!(parse_biguint("263").unwrap(), big(263));
    }

    #[test]
    fn test_whitespace_and_separators() {
        assert_eq!(parse_biguint("  1009\n").unwrap(), big(1009));
        assert_eq!(parse_biguint("0xdead_beef").unwrap(), big(0xdead_beef));
        assert_eq!(parse_biguint("0").unwrap(), big(0));
    }

    #[test]
    fn test_rejects_foreign_digits() {
        let rejected = [
            "", "0x", "12a", "0b102", "0o9", "-5", "+5", "1__0", "_1", "1_", "0x_1", "1 0",
        ];
        for bad in rejected {
            let err = parse_biguint(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Format, "accepted {bad:?}");
        }
    }

    #[test]
    fn test_hex_digits_span_lines() {
        let text = "FFFFFFFF FFFFFFFF\n  C90FDAA2 2168C234\n";
        assert_eq!(
            parse_hex_digits(text).unwrap(),
            BigUint::parse_bytes(b"FFFFFFFFFFFFFFFFC90FDAA22168C234", 16).unwrap()
        );
        assert_eq!(parse_hex_digits("0x3f1").unwrap(), big(1009));
        assert!(parse_hex_digits("  \n").is_err());
        assert!(parse_hex_digits("12 G4").is_err());
    }

    #[test]
    fn test_to_hex_reads_back() {
        let value = BigUint::parse_bytes(b"ad107e1e9123a9d0d660faa79559c51f", 16).unwrap();
        let text = to_hex(&value);
        assert_eq!(text, "0xad107e1e9123a9d0d660faa79559c51f");
        assert_eq!(parse_biguint(&text).unwrap(), value);
        assert_eq!(parse_hex_digits(&text).unwrap(), value);
        assert_eq!(to_hex(&big(0)), "0x0");
    }
}
