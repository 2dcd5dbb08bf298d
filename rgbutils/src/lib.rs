//! Conversions between the different ways of writing down a color: as a
//! packed integer like `0xff0000`, as separate components like
//! `RGB { r: 255, g: 0, b: 0 }`, or as a hex string like `"#ff0000"`.
//!
//! The seven core operations are plain functions at the crate root:
//!
//! * [`number_to_rgb`] and [`rgb_to_number`] for `0xRRGGBB` numbers.
//! * [`number_to_rgba`] and [`rgba_to_number`] for `0xAABBGGRR` numbers.
//! * [`string_to_rgba_number`] and [`string_to_rgba_object`] for hex
//!   strings.
//! * [`rgb_distance`] for the Euclidean distance between two colors.
//!
//! `rgb_distance` needs the `std` feature, which is on by default, because
//! `core` has no floating point square root. Without `std` the crate is
//! `no_std` and only [`rgb_distance_squared`] is available.
//!
//! Note that the two packed layouts are not the same. See the [`packed`]
//! module for details.
//!
//! The string functions never fail. For input that ought to be rejected
//! instead, use [`try_string_to_rgba_number`], [`try_string_to_rgba_object`]
//! or the `FromStr` implementations on [`RGB`] and [`RGBA`].
//!
//! With the `macros` feature, which is on by default, the [`rgb!`] and
//! [`rgba!`] macros turn a string literal into a color at compile time:
//!
//! ```rust
//! use rgbutils::{rgba, string_to_rgba_object};
//! const ORANGE: rgbutils::RGBA = rgba!("#ff8000");
//! assert_eq!(ORANGE, string_to_rgba_object("#ff8000"));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

// Lets the macros' `::rgbutils` paths resolve inside this crate too.
extern crate self as rgbutils;

pub mod color;
pub mod distance;
pub mod error;
pub mod hex;
pub mod packed;

pub use color::{Channel, RGB, RGBA};
pub use error::ParseColorError;

#[cfg(feature = "std")]
pub use distance::rgb_distance;
pub use distance::rgb_distance_squared;
pub use hex::{
    string_to_rgba_number, string_to_rgba_object, try_string_to_rgba_number,
    try_string_to_rgba_object,
};
pub use packed::{number_to_rgb, number_to_rgba, rgb_to_number, rgba_to_number};

#[cfg(feature = "macros")]
pub use rgbutils_macros::{rgb, rgba};

#[cfg(all(test, feature = "macros"))]
mod tests {
    use super::*;

    const RED: RGB = rgb!("#ff0000");
    const HALF_GREEN: RGBA = rgba!("0x00ff0080");

    #[test]
    fn test_rgb_macro() {
        assert_eq!(RED, RGB::new(255, 0, 0));
        assert_eq!(rgb!("102030"), RGB::new(0x10, 0x20, 0x30));
        assert_eq!(rgb!("#ABCDEF"), number_to_rgb(0xabcdef));
    }

    #[test]
    fn test_rgba_macro() {
        assert_eq!(HALF_GREEN, RGBA::new(0, 255, 0, 0x80));
        assert_eq!(rgba!("#ff0000"), RGBA::new(255, 0, 0, 255));
    }

    #[test]
    fn test_macros_agree_with_parser() {
        assert_eq!(rgba!("#ff0000"), string_to_rgba_object("#ff0000"));
        assert_eq!(rgba!("#ff0000ff"), string_to_rgba_object("#ff0000ff"));
        assert_eq!(rgba!("0x11223344"), string_to_rgba_object("0x11223344"));
        assert_eq!(
            rgba!("11223344").to_number(),
            string_to_rgba_number("11223344")
        );
    }
}
