// crates/citymap-core/src/text.rs

//! Grammar for city names, state codes, decimals and whole store rows.
//!
//! Character classes are ASCII only: `[A-Za-z]` for names, `[A-Z]` for
//! state codes and `[0-9]` for digits.

use once_cell::sync::Lazy;
use regex::Regex;

/// One or more letter-groups joined by a single whitespace or hyphen.
pub const CITY_NAME_PATTERN: &str = r"[A-Za-z]+(?:[\s-][A-Za-z]+)*";
/// Exactly two uppercase letters.
pub const STATE_CODE_PATTERN: &str = r"[A-Z]{2}";
/// Optionally negative, optionally fractional.
pub const DECIMAL_PATTERN: &str = r"-?[0-9]+(?:\.[0-9]+)?";

fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("^{pattern}$")).expect("static grammar must compile")
}

static CITY_NAME: Lazy<Regex> = Lazy::new(|| anchored(CITY_NAME_PATTERN));
static STATE_CODE: Lazy<Regex> = Lazy::new(|| anchored(STATE_CODE_PATTERN));
static DECIMAL: Lazy<Regex> = Lazy::new(|| anchored(DECIMAL_PATTERN));

/// `"<City Name>, <ST>", <lat>, <lon>;`
pub(crate) static ROW: Lazy<Regex> = Lazy::new(|| {
    anchored(&format!(
        r#""(?P<city>{CITY_NAME_PATTERN}), (?P<state>{STATE_CODE_PATTERN})", (?P<lat>{DECIMAL_PATTERN}), (?P<lon>{DECIMAL_PATTERN});"#
    ))
});

/// Line breaks match `\s` but cannot be stored in the line-based format.
pub fn is_valid_city_name(s: &str) -> bool {
    CITY_NAME.is_match(s) && !s.contains(['\n', '\r'])
}

pub fn is_valid_state_code(s: &str) -> bool {
    STATE_CODE.is_match(s)
}

/// Textual shape of a coordinate as accepted in store rows and add requests.
/// Says nothing about bounds; see [`crate::geo::is_valid_coordinate`].
pub fn is_valid_decimal(s: &str) -> bool {
    DECIMAL.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_names() {
        for ok in ["Denver", "Los Angeles", "Winston-Salem", "Wilkes-Barre Township"] {
            assert!(is_valid_city_name(ok), "{ok}");
        }
        for bad in [
            "", "Los  Angeles", " Denver", "Denver ", "-Denver", "Denver-", "Winston--Salem",
            "St. Louis", "Denver1", "Zürich", "Los\nAngeles", "Los\rAngeles",
            "Los\r\nAngeles",
        ] {
            assert!(!is_valid_city_name(bad), "{bad:?}");
        }
    }

    #[test]
    fn state_codes() {
        assert!(is_valid_state_code("TN"));
        assert!(!is_valid_state_code("tn"));
        assert!(!is_valid_state_code("T"));
        assert!(!is_valid_state_code("TNN"));
        assert!(!is_valid_state_code("T1"));
    }

    #[test]
    fn decimals() {
        for ok in ["0", "-74", "36.17", "-122.33", "90.0000"] {
            assert!(is_valid_decimal(ok), "{ok}");
        }
        for bad in ["", "+1", "1.", ".5", "1e5", "--1", "1.2.3", " 1", "NaN"] {
            assert!(!is_valid_decimal(bad), "{bad:?}");
        }
    }

    #[test]
    fn row_captures_fields() {
        let caps = ROW
            .captures(r#""Winston-Salem, NC", 36.1, -80.24;"#)
            .expect("row matches");
        assert_eq!(&caps["city"], "Winston-Salem");
        assert_eq!(&caps["state"], "NC");
        assert_eq!(&caps["lat"], "36.1");
        assert_eq!(&caps["lon"], "-80.24");
    }
}
