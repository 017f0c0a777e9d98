//! Keyboard mapping for the calculator input alphabet.
//!
//! The page feeds DOM `KeyboardEvent.key` values through the same mapping,
//! so pointer and keyboard input share one set of transitions.

use super::{CalcKey, Operator};

impl CalcKey {
    /// Maps a DOM `KeyboardEvent.key` value to a calculator key.
    ///
    /// Returns `None` for keys the calculator does not handle.
    pub fn from_key(key: &str) -> Option<Self> {
        let mapped = match key {
            "." => CalcKey::Decimal,
            "+" => CalcKey::Op(Operator::Add),
            "-" => CalcKey::Op(Operator::Sub),
            "*" => CalcKey::Op(Operator::Mul),
            "/" => CalcKey::Op(Operator::Div),
            "Enter" | "=" => CalcKey::Equals,
            "Escape" | "c" | "C" => CalcKey::Clear,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(d @ '0'..='9'), None) => CalcKey::Digit(d as u8 - b'0'),
                    _ => return None,
                }
            }
        };
        Some(mapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_digits() {
        for d in 0..=9u8 {
            assert_eq!(CalcKey::from_key(&d.to_string()), Some(CalcKey::Digit(d)));
        }
    }

    #[test]
    fn maps_operators_and_decimal() {
        assert_eq!(CalcKey::from_key("+"), Some(CalcKey::Op(Operator::Add)));
        assert_eq!(CalcKey::from_key("-"), Some(CalcKey::Op(Operator::Sub)));
        assert_eq!(CalcKey::from_key("*"), Some(CalcKey::Op(Operator::Mul)));
        assert_eq!(CalcKey::from_key("/"), Some(CalcKey::Op(Operator::Div)));
        assert_eq!(CalcKey::from_key("."), Some(CalcKey::Decimal));
    }

    #[test]
    fn maps_equals_and_clear_aliases() {
        assert_eq!(CalcKey::from_key("Enter"), Some(CalcKey::Equals));
        assert_eq!(CalcKey::from_key("="), Some(CalcKey::Equals));
        assert_eq!(CalcKey::from_key("Escape"), Some(CalcKey::Clear));
        assert_eq!(CalcKey::from_key("c"), Some(CalcKey::Clear));
        assert_eq!(CalcKey::from_key("C"), Some(CalcKey::Clear));
    }

    #[test]
    fn ignores_unhandled_keys() {
        for key in ["a", "F5", "Shift", "10", "", " ", "Backspace"] {
            assert_eq!(CalcKey::from_key(key), None, "key {key:?} should not map");
        }
    }
}
