//! A small color palette built on genums.
//!
//! Two families, [`Color`] and [`Color2`], both contain a `"red"`. They are
//! distinct types, so a function taking `EnumString<Color>` cannot be handed
//! [`RED_2`]:
//!
//! ```rust,compile_fail
//! use colors::{RED_2, describe};
//!
//! describe(&RED_2);
//! ```

use clap::ValueEnum;
use genums::{EnumString, Family, StringFactory};
use thiserror::Error;

/// The palette family.
#[derive(Family)]
pub enum Color {}

/// A second family that happens to reuse a literal from [`Color`].
#[derive(Family)]
pub enum Color2 {}

/// Factory for [`Color`] values.
pub const COLORS: StringFactory<Color> = StringFactory::new();
/// Factory for [`Color2`] values.
pub const COLORS_2: StringFactory<Color2> = StringFactory::new();

pub const RED: EnumString<Color> = COLORS.mint_const("red");
pub const BLACK: EnumString<Color> = COLORS.mint_const("black");
pub const WHITE: EnumString<Color> = COLORS.mint_const("white");

pub const RED_2: EnumString<Color2> = COLORS_2.mint_const("red");

/// Errors raised by the palette.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    /// The name does not match any palette constant.
    #[error("unknown color `{0}` (expected one of: red, black, white)")]
    UnknownColor(String),
}

/// How a color is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Unquoted textual form.
    Display,
    /// The canonical quoted encoding.
    #[default]
    Encode,
    /// JSON through serde.
    Json,
}

/// Maps a command-line name to one of the palette constants.
///
/// # Errors
///
/// Returns [`PaletteError::UnknownColor`] if `name` is not in the palette.
pub fn parse_color(name: &str) -> Result<EnumString<Color>, PaletteError> {
    [RED, BLACK, WHITE]
        .into_iter()
        .find(|color| color.raw() == name)
        .ok_or_else(|| PaletteError::UnknownColor(name.to_string()))
}

/// Accepts only values of the [`Color`] family.
pub fn describe(color: &EnumString<Color>) -> String {
    format!("color {color}")
}

/// Renders `color` in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(color: &EnumString<Color>, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Display => color.to_string(),
        OutputFormat::Encode => color.encode(),
        OutputFormat::Json => serde_json::to_string(color)?,
    })
}
