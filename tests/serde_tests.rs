#![cfg(feature = "serde")]

//! Integration tests for serde support in genums.
//!
//! Values serialize as strings holding their textual form, for every scalar
//! kind. For text without special characters this is byte-for-byte the same
//! as `encode()`.

use genums::{
    BoolFactory, EnumBool, EnumInt, EnumString, Family, Float64Factory, IntFactory, StringFactory,
};
use rstest::rstest;
use serde::Serialize;

enum Color {}
impl Family for Color {}

const RED: EnumString<Color> = StringFactory::new().mint_const("red");
const ANSWER: EnumInt<Color> = IntFactory::new().mint_const(42);
const YES: EnumBool<Color> = BoolFactory::new().mint_const(true);

#[derive(Serialize)]
struct Swatch {
    color: EnumString<Color>,
    code: EnumInt<Color>,
    visible: EnumBool<Color>,
}

#[rstest]
fn test_json_matches_encode() {
    assert_eq!(serde_json::to_string(&RED).unwrap(), RED.encode());
    assert_eq!(serde_json::to_string(&ANSWER).unwrap(), ANSWER.encode());
    assert_eq!(serde_json::to_string(&YES).unwrap(), YES.encode());
}

#[rstest]
fn test_float_serializes_as_string() {
    let half = Float64Factory::<Color>::new().mint(0.5);
    assert_eq!(serde_json::to_string(&half).unwrap(), "\"0.5\"");
}

#[rstest]
fn test_struct_fields_are_strings() {
    let swatch = Swatch {
        color: RED,
        code: ANSWER,
        visible: YES,
    };
    assert_eq!(
        serde_json::to_string(&swatch).unwrap(),
        r#"{"color":"red","code":"42","visible":"true"}"#
    );
}

#[rstest]
fn test_serializer_escapes_where_encode_does_not() {
    let quoted = StringFactory::<Color>::new().mint("a\"b");
    assert_eq!(serde_json::to_string(&quoted).unwrap(), r#""a\"b""#);
    assert_eq!(quoted.encode(), r#""a"b""#);
}
