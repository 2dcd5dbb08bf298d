extern crate proc_macro;
extern crate proc_macro2;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, LitStr};

mod parsers;

use parsers::{ColorLiteral, LiteralError};

/// Builds an `rgbutils::RGB` from a string literal like `"#ff8000"`,
/// checking the literal at compile time.
///
/// The literal may start with `#` or a lowercase `0x` and must then have exactly six
/// hex digits.
#[proc_macro]
pub fn rgb(input: TokenStream) -> TokenStream {
    let lit = parse_macro_input!(input as LitStr);
    match parse(&lit) {
        Ok(ColorLiteral::Rgb([r, g, b])) => quote!(
            ::rgbutils::RGB { r: #r, g: #g, b: #b }
        )
        .into(),
        Ok(ColorLiteral::Rgba(_)) => {
            let err = syn::Error::new(
                lit.span(),
                "rgb! takes six hex digits; use rgba! for a color with alpha",
            );
            err.into_compile_error().into()
        }
        Err(err) => err.into_compile_error().into(),
    }
}

/// Builds an `rgbutils::RGBA` from a string literal like `"#ff8000"` or
/// `"#ff800080"`, checking the literal at compile time.
///
/// The literal may start with `#` or a lowercase `0x` and must then have either six hex
/// digits, for an opaque color, or eight in `RRGGBBAA` order.
#[proc_macro]
pub fn rgba(input: TokenStream) -> TokenStream {
    let lit = parse_macro_input!(input as LitStr);
    let [r, g, b, a] = match parse(&lit) {
        Ok(ColorLiteral::Rgb([r, g, b])) => [r, g, b, 0xffu8],
        Ok(ColorLiteral::Rgba(rgba)) => rgba,
        Err(err) => return err.into_compile_error().into(),
    };
    quote!(
        ::rgbutils::RGBA { r: #r, g: #g, b: #b, a: #a }
    )
    .into()
}

fn parse(lit: &LitStr) -> syn::Result<ColorLiteral> {
    parsers::color_literal(&lit.value()).map_err(|err| {
        let msg = match err {
            LiteralError::NotHex(offset, c) => {
                format!("invalid hex digit {:?} at offset {} in color", c, offset)
            }
            LiteralError::Length(len) => {
                format!("color needs six or eight hex digits, not {}", len)
            }
        };
        syn::Error::new(lit.span(), msg)
    })
}
