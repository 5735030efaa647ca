//! 24-bit RGB colors and `#RRGGBB` parsing.

use std::fmt;

use crate::error::ColorParseError;

/// A 24-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Rgb {
    /// Pure white, the fallback color of an empty gradient.
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

    /// Create a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a color of the exact form `#RRGGBB`.
    ///
    /// Digits may be upper or lower case. Short forms and alpha channels are
    /// not accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatmark::Rgb;
    ///
    /// assert_eq!(Rgb::parse_hex("#FF00aa").unwrap(), Rgb::new(255, 0, 170));
    /// assert!(Rgb::parse_hex("#F0A").is_err());
    /// ```
    pub fn parse_hex(input: &str) -> Result<Self, ColorParseError> {
        let digits = input
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(input.to_string()))?;

        let chars: Vec<char> = digits.chars().collect();
        if chars.len() != 6 {
            return Err(ColorParseError::InvalidLength(input.to_string()));
        }

        let pair = |i: usize| -> Result<u8, ColorParseError> {
            let high = Self::parse_hex_digit(input, chars[i])?;
            let low = Self::parse_hex_digit(input, chars[i + 1])?;
            Ok(high * 16 + low)
        };

        Ok(Self::new(pair(0)?, pair(2)?, pair(4)?))
    }

    fn parse_hex_digit(input: &str, c: char) -> Result<u8, ColorParseError> {
        match c {
            '0'..='9' => Ok(c as u8 - b'0'),
            'a'..='f' => Ok(c as u8 - b'a' + 10),
            'A'..='F' => Ok(c as u8 - b'A' + 10),
            _ => Err(ColorParseError::InvalidDigit {
                input: input.to_string(),
                digit: c,
            }),
        }
    }

    /// Format as lower-case `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Sum of the absolute per-channel differences (L1 distance).
    pub fn distance(&self, other: &Rgb) -> u32 {
        u32::from(self.r.abs_diff(other.r))
            + u32::from(self.g.abs_diff(other.g))
            + u32::from(self.b.abs_diff(other.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Returns true if `c` is one of `0-9`, `a-f`, `A-F`.
pub(crate) fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_upper_and_lower() {
        assert_eq!(Rgb::parse_hex("#ff5733").unwrap(), Rgb::new(255, 87, 51));
        assert_eq!(Rgb::parse_hex("#FF5733").unwrap(), Rgb::new(255, 87, 51));
        assert_eq!(Rgb::parse_hex("#000000").unwrap(), Rgb::new(0, 0, 0));
    }

    #[test]
    fn parse_hex_rejects_missing_hash() {
        assert_eq!(
            Rgb::parse_hex("ff5733"),
            Err(ColorParseError::MissingHash("ff5733".into()))
        );
    }

    #[test]
    fn parse_hex_rejects_wrong_length() {
        assert!(matches!(
            Rgb::parse_hex("#f00"),
            Err(ColorParseError::InvalidLength(_))
        ));
        assert!(matches!(
            Rgb::parse_hex("#ff000000"),
            Err(ColorParseError::InvalidLength(_))
        ));
    }

    #[test]
    fn parse_hex_rejects_bad_digit() {
        assert_eq!(
            Rgb::parse_hex("#ZZ0000"),
            Err(ColorParseError::InvalidDigit {
                input: "#ZZ0000".into(),
                digit: 'Z'
            })
        );
    }

    #[test]
    fn to_hex_is_lower_case() {
        assert_eq!(Rgb::new(255, 0, 170).to_hex(), "#ff00aa");
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "#010203");
    }

    #[test]
    fn distance_is_l1() {
        let a = Rgb::new(10, 20, 30);
        let b = Rgb::new(20, 10, 40);
        assert_eq!(a.distance(&b), 30);
        assert_eq!(b.distance(&a), 30);
    }
}
