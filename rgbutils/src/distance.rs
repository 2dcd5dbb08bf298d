//! Distance between colors.

use crate::color::{Channel, RGB};

/// Returns the square of the Euclidean distance between two colors in RGB
/// space. Alpha is ignored.
///
/// This is exact, and orders pairs of colors in the same way as
/// [`rgb_distance`](crate::rgb_distance), so it's useful for finding the
/// nearest of several colors without taking square roots.
pub fn rgb_distance_squared<A: Into<RGB>, B: Into<RGB>>(rgb1: A, rgb2: B) -> u32 {
    let (rgb1, rgb2) = (rgb1.into(), rgb2.into());
    Channel::COLOR
        .iter()
        .map(|&ch| {
            let diff = i32::from(rgb1.channel(ch)) - i32::from(rgb2.channel(ch));
            (diff * diff) as u32
        })
        .sum()
}

/// Returns the Euclidean distance between two colors, treating red, green
/// and blue as the axes of a three-dimensional space.
///
/// The result ranges from zero for identical colors up to about 441.67
/// between black and white. Alpha is ignored, so `RGBA` values can be
/// passed directly.
///
/// Only available with the `std` feature.
///
/// ```rust
/// use rgbutils::{rgb_distance, RGB};
/// let d = rgb_distance(RGB { r: 255, g: 0, b: 0 }, RGB { r: 0, g: 0, b: 255 });
/// assert!((d - 360.62445840513925).abs() < 1e-9);
/// ```
#[cfg(feature = "std")]
pub fn rgb_distance<A: Into<RGB>, B: Into<RGB>>(rgb1: A, rgb2: B) -> f64 {
    f64::from(rgb_distance_squared(rgb1, rgb2)).sqrt()
}
