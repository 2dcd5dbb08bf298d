//! Parsing of hexadecimal color strings such as `#ff0000`, `0xff0000ff` or
//! just `ff0000`.
//!
//! There are two flavors of each function here. The lenient ones,
//! [`string_to_rgba_number`] and [`string_to_rgba_object`], accept any
//! string at all: they read as many leading hex digits as they can and
//! treat a string with no digits as zero. The strict ones, whose names start
//! with `try_`, return a [`ParseColorError`] for anything that isn't a
//! clean run of one to eight hex digits.
//!
//! Both flavors first remove the first `#` and then the first `0x` from the
//! string, wherever they appear, and then decide how to interpret the
//! digits by the length of what remains: exactly six characters is taken as
//! `RRGGBB`, and any other length as `RRGGBBAA`.

use alloc::string::String;
use core::str::FromStr;

use nom::IResult;

use crate::color::{RGB, RGBA};
use crate::error::ParseColorError;
use crate::packed::{number_to_rgb, number_to_rgba, rgba_to_number};

/// Number of characters in an `RRGGBB` string once its markers are removed.
const RGB_DIGITS: usize = 6;

/// Most hex digits that the strict parsers accept.
const MAX_DIGITS: usize = 8;

/// Transforms a string like `#ff0000` or `0xff0000ff` into a number.
///
/// A six-digit string is returned as a plain `0xRRGGBB` number. A string
/// of any other length is read as `RRGGBBAA` and returned in the same
/// `0xAABBGGRR` order that [`rgba_to_number`] produces, so that
/// [`number_to_rgba`] recovers its components.
///
/// Nothing is rejected: trailing characters that aren't hex digits are
/// ignored, and a string with no leading hex digits at all produces zero.
/// A leading `-` negates the value in two's complement, so `"-00001"`
/// produces `0xffffffff`.
///
/// ```rust
/// use rgbutils::string_to_rgba_number;
/// assert_eq!(string_to_rgba_number("#ff0000"), 0xff0000);
/// assert_eq!(string_to_rgba_number("ff0000ff"), 0xff0000ff);
/// ```
pub fn string_to_rgba_number(string: &str) -> u32 {
    let cleaned = strip_markers(string);
    let number = match parse_hex_prefix(&cleaned) {
        Some(number) => number,
        None => {
            log::debug!("no hex digits in color string {:?}, using zero", string);
            0
        }
    };
    reorder_rgba(&cleaned, number)
}

/// Transforms a string like `#ff0000` or `0xff0000ff` into its components.
///
/// A six-digit string is fully opaque. Any other string is read as
/// `RRGGBBAA`. Like [`string_to_rgba_number`], this never fails.
///
/// ```rust
/// use rgbutils::{string_to_rgba_object, RGBA};
/// let red = RGBA { r: 255, g: 0, b: 0, a: 255 };
/// assert_eq!(string_to_rgba_object("#ff0000"), red);
/// assert_eq!(string_to_rgba_object("ff0000ff"), red);
/// ```
pub fn string_to_rgba_object(string: &str) -> RGBA {
    let number = string_to_rgba_number(string);
    components(&strip_markers(string), number)
}

/// Like [`string_to_rgba_number`], but returns an error unless what remains
/// after removing the `#` and `0x` markers is between one and eight hex
/// digits.
pub fn try_string_to_rgba_number(string: &str) -> Result<u32, ParseColorError> {
    let cleaned = strip_markers(string);
    let number = parse_hex_exact(&cleaned)?;
    Ok(reorder_rgba(&cleaned, number))
}

/// Like [`string_to_rgba_object`], but with the same checks as
/// [`try_string_to_rgba_number`].
pub fn try_string_to_rgba_object(string: &str) -> Result<RGBA, ParseColorError> {
    let cleaned = strip_markers(string);
    let number = reorder_rgba(&cleaned, parse_hex_exact(&cleaned)?);
    Ok(components(&cleaned, number))
}

impl FromStr for RGBA {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        try_string_to_rgba_object(s)
    }
}

impl FromStr for RGB {
    type Err = ParseColorError;

    /// Parses in the same way as `RGBA`, discarding any alpha component.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        try_string_to_rgba_object(s).map(RGBA::as_rgb)
    }
}

/// Removes the first `#`, and then the first `0x`, from anywhere in the
/// string.
fn strip_markers(string: &str) -> String {
    string.replacen('#', "", 1).replacen("0x", "", 1)
}

/// Length is counted in UTF-16 code units, not bytes or chars.
fn is_rgb_length(cleaned: &str) -> bool {
    cleaned.encode_utf16().count() == RGB_DIGITS
}

fn reorder_rgba(cleaned: &str, number: u32) -> u32 {
    if is_rgb_length(cleaned) {
        return number;
    }
    // The digits were read as 0xRRGGBBAA, but number_to_rgba expects
    // 0xAABBGGRR, so each decoded field holds a different channel.
    let RGBA {
        r: a,
        g: b,
        b: g,
        a: r,
    } = number_to_rgba(number);
    rgba_to_number(r as u32, g as u32, b as u32, a as u32)
}

fn components(cleaned: &str, number: u32) -> RGBA {
    if is_rgb_length(cleaned) {
        number_to_rgb(number).as_rgba()
    } else {
        number_to_rgba(number)
    }
}

/// The pieces of a loosely-formatted hexadecimal integer.
#[derive(Debug, PartialEq, Eq)]
struct HexInt<'a> {
    negative: bool,
    digits: &'a str,
}

/// Whitespace and line terminators as ECMAScript defines them. This differs
/// from `char::is_whitespace`, which also accepts U+0085 but not U+FEFF.
fn is_script_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0b}'
            | '\u{0c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

fn leading_space(i: &str) -> IResult<&str, &str> {
    nom::bytes::complete::take_while(is_script_space)(i)
}

fn sign(i: &str) -> IResult<&str, Option<char>> {
    nom::combinator::opt(nom::character::complete::one_of("+-"))(i)
}

fn radix_prefix(i: &str) -> IResult<&str, Option<&str>> {
    nom::combinator::opt(nom::bytes::complete::tag_no_case("0x"))(i)
}

fn hex_digits(i: &str) -> IResult<&str, &str> {
    nom::character::complete::hex_digit0(i)
}

/// Matches optional leading whitespace, an optional sign, an optional `0x`
/// and then as many hex digits as are present, which may be none at all.
fn hex_int(i: &str) -> IResult<&str, HexInt> {
    let (i, _) = leading_space(i)?;
    let (i, sign) = sign(i)?;
    let (i, _) = radix_prefix(i)?;
    let (i, digits) = hex_digits(i)?;
    Ok((
        i,
        HexInt {
            negative: sign == Some('-'),
            digits,
        },
    ))
}

/// Accumulates hex digits, keeping only the low 32 bits of the result.
fn fold_digits(digits: &str) -> u32 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(16))
        .fold(0u32, |acc, d| acc.wrapping_mul(16).wrapping_add(d))
}

/// Reads the leading hex integer from the given string, returning `None`
/// if it doesn't start with any digits.
///
/// A negative value wraps around as a two's complement 32-bit integer, and
/// a value too wide for 32 bits keeps only its low 32 bits.
fn parse_hex_prefix(i: &str) -> Option<u32> {
    let (rest, int) = match hex_int(i) {
        Ok(v) => v,
        Err(_) => return None,
    };
    if int.digits.is_empty() {
        return None;
    }
    if !rest.is_empty() {
        log::trace!("ignoring {:?} after hex digits in color string", rest);
    }
    let value = fold_digits(int.digits);
    Some(if int.negative {
        value.wrapping_neg()
    } else {
        value
    })
}

fn parse_hex_exact(cleaned: &str) -> Result<u32, ParseColorError> {
    if cleaned.is_empty() {
        return Err(ParseColorError::Empty);
    }
    let (rest, digits) = match hex_digits(cleaned) {
        Ok(v) => v,
        Err(_) => (cleaned, ""),
    };
    if let Some(found) = rest.chars().next() {
        return Err(ParseColorError::InvalidFormat {
            index: cleaned.len() - rest.len(),
            found,
        });
    }
    if digits.len() > MAX_DIGITS {
        return Err(ParseColorError::TooLong { len: digits.len() });
    }
    Ok(fold_digits(digits))
}
