//! Component representations of a color.

use core::convert::TryFrom;
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// A color as separate red, green and blue components.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RGB {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A color as separate red, green, blue and alpha components.
///
/// An alpha of `0xff` is fully opaque.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RGBA {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Identifies one of the four channels of a color.
///
/// The discriminant is the channel's index in `[r, g, b, a]` order.
#[derive(TryFromPrimitive, IntoPrimitive, Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Channel {
    Red = 0,
    Green = 1,
    Blue = 2,
    Alpha = 3,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];
    pub const COLOR: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Returns the channel at the given index, or `None` if the index is
    /// greater than three.
    pub fn from_index(idx: u8) -> Option<Self> {
        Self::try_from(idx).ok()
    }
}

impl RGB {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn as_rgba(self) -> RGBA {
        RGBA {
            r: self.r,
            g: self.g,
            b: self.b,
            a: 0xff,
        }
    }

    /// Returns the value of the given channel. An `RGB` color is always
    /// opaque, so `Channel::Alpha` is `0xff`.
    pub const fn channel(self, ch: Channel) -> u8 {
        match ch {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
            Channel::Alpha => 0xff,
        }
    }
}

impl RGBA {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn as_rgb(self) -> RGB {
        RGB {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    pub const fn channel(self, ch: Channel) -> u8 {
        match ch {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
            Channel::Alpha => self.a,
        }
    }
}

impl From<RGBA> for RGB {
    fn from(src: RGBA) -> Self {
        src.as_rgb()
    }
}

impl From<RGB> for RGBA {
    fn from(src: RGB) -> Self {
        src.as_rgba()
    }
}
