//! Error type returned by the strict parsing functions.

/// Describes why a color string was rejected by
/// [`try_string_to_rgba_number`](crate::try_string_to_rgba_number) and the
/// other strict parsers.
///
/// The lenient parsers never return this; they coerce anything they can't
/// read to zero instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseColorError {
    /// Nothing was left once the `#` and `0x` markers were removed.
    #[error("empty color string")]
    Empty,

    /// A character that isn't a hexadecimal digit. `index` is the byte
    /// offset of `found` within the string after the `#` and `0x` markers
    /// were removed.
    #[error("invalid hex digit {found:?} at offset {index}")]
    InvalidFormat { index: usize, found: char },

    /// More hex digits than fit in a 32-bit color.
    #[error("{len} hex digits is too many for a 32-bit color")]
    TooLong { len: usize },
}
