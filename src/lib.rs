//! # genums
//!
//! Type-safe generic enums: named constants of a primitive type, bound to a
//! nominal family so that two enums with identical values can never be
//! mixed up.
//!
//! ## Overview
//!
//! - **Families**: a caller-declared marker type implementing [`Family`]
//! - **Values**: [`Enum<V, F>`], an immutable scalar tagged with family `F`
//!   at the type level only
//! - **Typed facades**: [`EnumString`], [`EnumInt`], [`EnumFloat64`] and
//!   [`EnumBool`], the four supported scalar kinds
//! - **Factories**: [`Factory<V, F>`] and its facade aliases, the only way
//!   to mint values
//!
//! Every value supports [`value`](Enum::value), [`is_equal`](Enum::is_equal)
//! and [`encode`](Enum::encode). Encoding always produces a quoted string,
//! whatever the scalar kind.
//!
//! ## Feature Flags
//!
//! - `derive`: `#[derive(Family)]` (enabled by default)
//! - `serde`: `serde::Serialize` for values
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use genums::prelude::*;
//!
//! enum Color {}
//! impl Family for Color {}
//!
//! enum Paint {}
//! impl Family for Paint {}
//!
//! const COLORS: StringFactory<Color> = StringFactory::new();
//! const RED: EnumString<Color> = COLORS.mint_const("red");
//! const BLACK: EnumString<Color> = COLORS.mint_const("black");
//!
//! // Same literal, different family: a distinct type.
//! const PAINT_RED: EnumString<Paint> = StringFactory::new().mint_const("red");
//!
//! fn paint(color: &EnumString<Color>) -> String {
//!     color.encode()
//! }
//!
//! assert_eq!(paint(&RED), "\"red\"");
//! assert!(!RED.is_equal(&BLACK));
//! assert_eq!(PAINT_RED.raw(), RED.raw());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

// Lets `#[derive(Family)]` expand to `::genums::Family` inside this crate.
extern crate self as genums;

/// Prelude module for convenient imports.
///
/// Re-exports the family trait, the value and factory types and every
/// facade alias.
///
/// # Usage
///
/// ```rust
/// use genums::prelude::*;
/// ```
pub mod prelude {
    pub use crate::factory::Factory;
    pub use crate::family::Family;
    pub use crate::kinds::{
        BoolFactory, EnumBool, EnumFloat64, EnumInt, EnumString, Float64Factory, IntFactory,
        StringFactory,
    };
    pub use crate::value::Enum;

    #[cfg(feature = "derive")]
    pub use genums_derive::Family;
}

mod factory;
mod family;
mod kinds;
mod scalar;
mod value;

pub use factory::Factory;
pub use family::Family;
pub use kinds::{
    BoolFactory, EnumBool, EnumFloat64, EnumInt, EnumString, Float64Factory, IntFactory,
    StringFactory,
};
pub use scalar::{Scalar, Text};
pub use value::Enum;

#[cfg(feature = "derive")]
pub use genums_derive::Family;
