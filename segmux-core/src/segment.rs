//! Seven-segment pattern encoding
//!
//! A pattern is one byte: bits 7..1 are segments A..G and bit 0 is the
//! decimal point. Bit `i` drives segment pin `i`, so segment pins are
//! given in the order `[DP, G, F, E, D, C, B, A]`.
//!
//! ```text
//!      A
//!     ---
//!  F |   | B
//!     -G-
//!  E |   | C
//!     ---  . DP
//!      D
//! ```

use core::ops::{BitOr, BitOrAssign};

/// One digit position's lit segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Segments(pub u8);

/// Digit glyphs 0-9
const DIGITS: [u8; 10] = [
    0b1111_1100, // 0
    0b0110_0000, // 1
    0b1101_1010, // 2
    0b1111_0010, // 3
    0b0110_0110, // 4
    0b1011_0110, // 5
    0b1011_1110, // 6
    0b1110_0000, // 7
    0b1111_1110, // 8
    0b1111_0110, // 9
];

impl Segments {
    /// Nothing lit
    pub const BLANK: Segments = Segments(0);

    /// Decimal point only
    pub const DECIMAL_POINT: Segments = Segments(0b0000_0001);

    /// Middle bar (segment G)
    pub const MINUS: Segments = Segments(0b0000_0010);

    /// Raw bit pattern
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether segment pin `index` is lit
    pub const fn is_lit(self, index: usize) -> bool {
        index < 8 && (self.0 >> index) & 1 == 1
    }

    /// Same pattern with the decimal point lit
    pub const fn with_decimal_point(self) -> Self {
        Segments(self.0 | Self::DECIMAL_POINT.0)
    }

    /// Check if the decimal point is lit
    pub const fn has_decimal_point(self) -> bool {
        self.0 & Self::DECIMAL_POINT.0 != 0
    }

    /// Decode the digit shown, ignoring the decimal point
    pub fn digit(self) -> Option<u8> {
        let glyph = self.0 & !Self::DECIMAL_POINT.0;
        DIGITS.iter().position(|&d| d == glyph).map(|d| d as u8)
    }
}

impl BitOr for Segments {
    type Output = Segments;

    fn bitor(self, rhs: Segments) -> Segments {
        Segments(self.0 | rhs.0)
    }
}

impl BitOrAssign for Segments {
    fn bitor_assign(&mut self, rhs: Segments) {
        self.0 |= rhs.0;
    }
}

impl From<u8> for Segments {
    fn from(bits: u8) -> Self {
        Segments(bits)
    }
}

impl From<Segments> for u8 {
    fn from(segments: Segments) -> u8 {
        segments.0
    }
}

/// Raw decimal point bit, for hand-built symbols
pub const DECIMAL_POINT: u8 = Segments::DECIMAL_POINT.0;

/// Raw minus sign pattern, for hand-built symbols
pub const MINUS_SIGN: u8 = Segments::MINUS.0;

/// Encode a decimal digit
///
/// Anything above 9 falls back to a blank position instead of indexing
/// past the glyph table.
pub const fn encode_digit(digit: u8, decimal: bool) -> Segments {
    let glyph = if digit < 10 {
        Segments(DIGITS[digit as usize])
    } else {
        Segments::BLANK
    };
    if decimal {
        glyph.with_decimal_point()
    } else {
        glyph
    }
}

/// Encode the minus sign
pub const fn encode_minus() -> Segments {
    Segments::MINUS
}

/// Encode one numeral character
///
/// `'0'..='9'` map to digits, `'-'` to the minus sign; everything else is
/// blank.
pub fn encode_char(c: char) -> Segments {
    match c {
        '-' => encode_minus(),
        '0'..='9' => encode_digit(c as u8 - b'0', false),
        _ => Segments::BLANK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_digit_table() {
        assert_eq!(encode_digit(0, false), Segments(0b1111_1100));
        assert_eq!(encode_digit(1, false), Segments(0b0110_0000));
        assert_eq!(encode_digit(8, false), Segments(0b1111_1110));
        assert_eq!(encode_digit(8, true), Segments(0b1111_1111));
    }

    #[test]
    fn test_out_of_range_digit_is_blank() {
        assert_eq!(encode_digit(10, false), Segments::BLANK);
        assert_eq!(encode_digit(255, false), Segments::BLANK);
        // Decimal point still honoured on the fallback
        assert_eq!(encode_digit(42, true), Segments::DECIMAL_POINT);
    }

    #[test]
    fn test_minus_sign() {
        assert_eq!(encode_minus().bits(), MINUS_SIGN);
        assert_eq!(encode_char('-'), Segments::MINUS);
        assert_eq!(encode_minus().digit(), None);
    }

    #[test]
    fn test_encode_char() {
        assert_eq!(encode_char('7'), encode_digit(7, false));
        assert_eq!(encode_char(' '), Segments::BLANK);
        assert_eq!(encode_char('x'), Segments::BLANK);
    }

    #[test]
    fn test_is_lit() {
        let one = encode_digit(1, true);
        // B and C are bits 6 and 5
        assert!(one.is_lit(6));
        assert!(one.is_lit(5));
        assert!(one.is_lit(0));
        assert!(!one.is_lit(7));
        assert!(!one.is_lit(8));
    }

    #[test]
    fn test_bitor() {
        let mut s = encode_digit(3, false);
        s |= Segments::DECIMAL_POINT;
        assert!(s.has_decimal_point());
        assert_eq!(s, encode_digit(3, false) | Segments::DECIMAL_POINT);
        assert_eq!(u8::from(s), s.bits());
    }

    proptest! {
        #[test]
        fn prop_decimal_differs_by_point_bit(d in 0u8..10) {
            let plain = encode_digit(d, false);
            let dotted = encode_digit(d, true);
            prop_assert_eq!(plain.bits() ^ dotted.bits(), DECIMAL_POINT);
            prop_assert!(!plain.has_decimal_point());
            prop_assert_eq!(encode_digit(d, false), plain);
        }

        #[test]
        fn prop_digit_decodes(d in 0u8..10, decimal in any::<bool>()) {
            prop_assert_eq!(encode_digit(d, decimal).digit(), Some(d));
        }
    }
}
