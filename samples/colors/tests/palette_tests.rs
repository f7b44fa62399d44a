//! Tests for the sample palette.

use colors::{BLACK, OutputFormat, PaletteError, RED, RED_2, WHITE, describe, parse_color, render};
use rstest::rstest;

#[rstest]
#[case("red", RED)]
#[case("black", BLACK)]
#[case("white", WHITE)]
fn test_parse_known_colors(#[case] name: &str, #[case] expected: genums::EnumString<colors::Color>) {
    assert_eq!(parse_color(name), Ok(expected));
}

#[rstest]
fn test_parse_unknown_color() {
    let error = parse_color("mauve").unwrap_err();
    assert_eq!(error, PaletteError::UnknownColor("mauve".to_string()));
    assert_eq!(
        error.to_string(),
        "unknown color `mauve` (expected one of: red, black, white)"
    );
}

#[rstest]
#[case(OutputFormat::Display, "red")]
#[case(OutputFormat::Encode, "\"red\"")]
#[case(OutputFormat::Json, "\"red\"")]
fn test_render_formats(#[case] format: OutputFormat, #[case] expected: &str) {
    assert_eq!(render(&RED, format).unwrap(), expected);
}

#[rstest]
fn test_describe_uses_display() {
    assert_eq!(describe(&BLACK), "color black");
}

#[rstest]
fn test_same_literal_in_other_family() {
    assert_eq!(RED_2.raw(), RED.raw());
}
