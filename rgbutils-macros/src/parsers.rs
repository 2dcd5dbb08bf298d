use nom::IResult;

/// A color literal after parsing, with components in `[r, g, b(, a)]`
/// order.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum ColorLiteral {
    Rgb([u8; 3]),
    Rgba([u8; 4]),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum LiteralError {
    /// A character other than a hex digit, at the given byte offset.
    NotHex(usize, char),
    /// The number of hex digits, which was neither six nor eight.
    Length(usize),
}

pub(crate) fn color_literal(input: &str) -> Result<ColorLiteral, LiteralError> {
    let (remain, digits) = match literal(input) {
        Ok(v) => v,
        Err(_) => (input, ""),
    };
    if let Some(c) = remain.chars().next() {
        return Err(LiteralError::NotHex(input.len() - remain.len(), c));
    }

    let n = digits
        .bytes()
        .filter_map(|b| (b as char).to_digit(16))
        .fold(0u32, |acc, d| acc << 4 | d);
    match digits.len() {
        6 => Ok(ColorLiteral::Rgb([
            (n >> 16) as u8,
            (n >> 8) as u8,
            n as u8,
        ])),
        8 => Ok(ColorLiteral::Rgba([
            (n >> 24) as u8,
            (n >> 16) as u8,
            (n >> 8) as u8,
            n as u8,
        ])),
        len => Err(LiteralError::Length(len)),
    }
}

fn literal_prefix(i: &str) -> IResult<&str, Option<&str>> {
    nom::combinator::opt(nom::branch::alt((
        nom::bytes::complete::tag("#"),
        nom::bytes::complete::tag("0x"),
    )))(i)
}

fn literal(i: &str) -> IResult<&str, &str> {
    nom::sequence::preceded(literal_prefix, nom::character::complete::hex_digit0)(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal() {
        assert_eq!(literal("#ff0000"), Ok(("", "ff0000")));
        assert_eq!(literal("0xff0000"), Ok(("", "ff0000")));
        assert_eq!(literal("0Xff0000"), Ok(("Xff0000", "0")));
        assert_eq!(literal("ff0000"), Ok(("", "ff0000")));
        assert_eq!(literal("#ff00zz"), Ok(("zz", "ff00")));
        assert_eq!(literal("##ff"), Ok(("#ff", "")));
    }

    #[test]
    fn test_rgb() {
        let got = color_literal("#ff8000");
        let want = Ok(ColorLiteral::Rgb([0xff, 0x80, 0x00]));
        assert_eq!(got, want);
    }

    #[test]
    fn test_rgba() {
        let got = color_literal("0x11223344");
        let want = Ok(ColorLiteral::Rgba([0x11, 0x22, 0x33, 0x44]));
        assert_eq!(got, want);
    }

    #[test]
    fn test_bare_digits() {
        let got = color_literal("FFFFFF");
        let want = Ok(ColorLiteral::Rgb([0xff, 0xff, 0xff]));
        assert_eq!(got, want);
    }

    #[test]
    fn test_not_hex() {
        let got = color_literal("#ff00zz");
        let want = Err(LiteralError::NotHex(5, 'z'));
        assert_eq!(got, want);
    }

    #[test]
    fn test_uppercase_prefix() {
        // Only a lowercase "0x" is a prefix, as in the runtime parser.
        let got = color_literal("0Xff0000");
        let want = Err(LiteralError::NotHex(1, 'X'));
        assert_eq!(got, want);
    }

    #[test]
    fn test_short() {
        let got = color_literal("#fff");
        let want = Err(LiteralError::Length(3));
        assert_eq!(got, want);
    }

    #[test]
    fn test_empty() {
        let got = color_literal("#");
        let want = Err(LiteralError::Length(0));
        assert_eq!(got, want);
    }
}
