//! Conversions between packed integer colors and their components.
//!
//! Two different byte layouts are in use here, and they are not mirror
//! images of one another:
//!
//! * [`number_to_rgb`] and [`rgb_to_number`] use `0xRRGGBB`, with red in
//!   the most significant of the three bytes.
//! * [`number_to_rgba`] and [`rgba_to_number`] use `0xAABBGGRR`, with red
//!   in the *least* significant byte.
//!
//! Each pair is the inverse of the other function in the same pair, but a
//! number produced by one pair must not be decoded with the other.

use crate::color::{RGB, RGBA};

/// Splits a number like `0xff0000` into its red, green and blue components.
///
/// Red comes from bits 16 through 23, green from bits 8 through 15 and blue
/// from bits 0 through 7. Any bits above bit 23 are ignored.
///
/// ```rust
/// use rgbutils::{number_to_rgb, RGB};
/// assert_eq!(number_to_rgb(0xff0000), RGB { r: 255, g: 0, b: 0 });
/// ```
pub const fn number_to_rgb(number: u32) -> RGB {
    RGB {
        r: (number >> 16 & 0xff) as u8,
        g: (number >> 8 & 0xff) as u8,
        b: (number & 0xff) as u8,
    }
}

/// Packs red, green and blue values into a number like `0xff0000`. This is
/// the inverse of [`number_to_rgb`].
///
/// The arguments are not masked to eight bits first, so a value greater
/// than 255 spills over into the neighboring byte. Callers wanting a clean
/// round-trip must pass values in `0..=255`.
///
/// ```rust
/// assert_eq!(rgbutils::rgb_to_number(255, 0, 0), 0xff0000);
/// ```
pub const fn rgb_to_number(r: u32, g: u32, b: u32) -> u32 {
    r << 16 | g << 8 | b
}

/// Splits a number in `0xAABBGGRR` order into its four components. This is
/// the inverse of [`rgba_to_number`].
///
/// ```rust
/// use rgbutils::{number_to_rgba, RGBA};
/// assert_eq!(
///     number_to_rgba(0xff0000ff),
///     RGBA { r: 255, g: 0, b: 0, a: 255 },
/// );
/// ```
pub const fn number_to_rgba(number: u32) -> RGBA {
    RGBA {
        r: (number & 0xff) as u8,
        g: (number >> 8 & 0xff) as u8,
        b: (number >> 16 & 0xff) as u8,
        a: (number >> 24 & 0xff) as u8,
    }
}

/// Packs red, green, blue and alpha values into a number in `0xAABBGGRR`
/// order. Each argument is first masked to its low eight bits.
///
/// ```rust
/// assert_eq!(rgbutils::rgba_to_number(255, 0, 0, 255), 0xff0000ff);
/// ```
pub const fn rgba_to_number(r: u32, g: u32, b: u32, a: u32) -> u32 {
    (a & 0xff) << 24 | (b & 0xff) << 16 | (g & 0xff) << 8 | (r & 0xff)
}

impl RGB {
    /// Equivalent to [`rgb_to_number`] with this color's components.
    pub const fn to_number(self) -> u32 {
        rgb_to_number(self.r as u32, self.g as u32, self.b as u32)
    }

    /// Equivalent to [`number_to_rgb`].
    pub const fn from_number(number: u32) -> Self {
        number_to_rgb(number)
    }
}

impl RGBA {
    /// Equivalent to [`rgba_to_number`] with this color's components.
    pub const fn to_number(self) -> u32 {
        rgba_to_number(self.r as u32, self.g as u32, self.b as u32, self.a as u32)
    }

    /// Equivalent to [`number_to_rgba`].
    pub const fn from_number(number: u32) -> Self {
        number_to_rgba(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_to_rgb() {
        assert_eq!(number_to_rgb(0x000000), RGB::new(0, 0, 0));
        assert_eq!(number_to_rgb(0xffffff), RGB::new(255, 255, 255));
        assert_eq!(number_to_rgb(0xff0000), RGB::new(255, 0, 0));
        assert_eq!(number_to_rgb(0x123456), RGB::new(0x12, 0x34, 0x56));
        // Anything above bit 23 is discarded.
        assert_eq!(number_to_rgb(0xab123456), RGB::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_rgb_to_number() {
        assert_eq!(rgb_to_number(255, 0, 0), 0xff0000);
        assert_eq!(rgb_to_number(0x12, 0x34, 0x56), 0x123456);
        assert_eq!(rgb_to_number(0, 0, 0), 0);
    }

    #[test]
    fn test_rgb_to_number_unmasked() {
        assert_eq!(rgb_to_number(0, 0, 0x100), 0x000100);
        assert_eq!(rgb_to_number(0, 0x1ff, 0), 0x01ff00);
        assert_eq!(rgb_to_number(0x1ff, 0, 0), 0x1ff0000);
    }

    #[test]
    fn test_number_to_rgba() {
        assert_eq!(number_to_rgba(0xff0000ff), RGBA::new(255, 0, 0, 255));
        assert_eq!(number_to_rgba(0x44332211), RGBA::new(0x11, 0x22, 0x33, 0x44));
        assert_eq!(number_to_rgba(0), RGBA::new(0, 0, 0, 0));
    }

    #[test]
    fn test_rgba_to_number() {
        assert_eq!(rgba_to_number(255, 0, 0, 255), 0xff0000ff);
        assert_eq!(rgba_to_number(0x11, 0x22, 0x33, 0x44), 0x44332211);
        assert_eq!(rgba_to_number(0x1ff, 0x100, 0x2ab, 0xfff), 0xffab00ff);
    }

    #[test]
    fn test_layouts_differ() {
        // The same components pack differently in the two layouts.
        assert_eq!(rgb_to_number(0x11, 0x22, 0x33), 0x112233);
        assert_eq!(rgba_to_number(0x11, 0x22, 0x33, 0), 0x332211);
    }

    #[test]
    fn test_rgb_round_trip() {
        for r in 0..=255u32 {
            for g in (0..=255u32).step_by(5) {
                for b in (0..=255u32).step_by(3) {
                    assert_eq!(
                        number_to_rgb(rgb_to_number(r, g, b)),
                        RGB::new(r as u8, g as u8, b as u8)
                    );
                }
            }
        }
    }

    #[test]
    fn test_rgba_round_trip() {
        for r in (0..=255u32).step_by(3) {
            for g in (0..=255u32).step_by(5) {
                for b in (0..=255u32).step_by(15) {
                    for a in (0..=255u32).step_by(17) {
                        assert_eq!(
                            number_to_rgba(rgba_to_number(r, g, b, a)),
                            RGBA::new(r as u8, g as u8, b as u8, a as u8)
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_methods() {
        assert_eq!(RGB::new(1, 2, 3).to_number(), 0x010203);
        assert_eq!(RGB::from_number(0x010203), RGB::new(1, 2, 3));
        assert_eq!(RGBA::new(1, 2, 3, 4).to_number(), 0x04030201);
        assert_eq!(RGBA::from_number(0x04030201), RGBA::new(1, 2, 3, 4));
    }
}
