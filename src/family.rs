//! Family markers - the nominal identity of an enum.
//!
//! A family is a type the caller declares for the sole purpose of being
//! named in a type parameter. Two enums over the same scalar kind, minted
//! from the same literals, stay mutually incompatible as long as their
//! families differ:
//!
//! ```rust
//! use genums::{EnumString, Family, StringFactory};
//!
//! enum Color {}
//! impl Family for Color {}
//!
//! enum Paint {}
//! impl Family for Paint {}
//!
//! fn describe(color: &EnumString<Color>) -> &str {
//!     color.as_str()
//! }
//!
//! let red = StringFactory::<Color>::new().mint("red");
//! assert_eq!(describe(&red), "red");
//! ```
//!
//! Passing a value of another family is a build error, not a runtime check:
//!
//! ```rust,compile_fail
//! use genums::{EnumString, Family, StringFactory};
//!
//! enum Color {}
//! impl Family for Color {}
//!
//! enum Paint {}
//! impl Family for Paint {}
//!
//! fn describe(color: &EnumString<Color>) -> &str {
//!     color.as_str()
//! }
//!
//! let red = StringFactory::<Paint>::new().mint("red");
//! describe(&red);
//! ```
//!
//! The same holds for comparison:
//!
//! ```rust,compile_fail
//! use genums::{Family, StringFactory};
//!
//! enum Color {}
//! impl Family for Color {}
//!
//! enum Paint {}
//! impl Family for Paint {}
//!
//! let red = StringFactory::<Color>::new().mint("red");
//! let other_red = StringFactory::<Paint>::new().mint("red");
//! red.is_equal(&other_red);
//! ```

/// Marker trait for enum families.
///
/// Implement it (or derive it with `#[derive(Family)]`) on a type that is
/// never instantiated. The preferred shape is an uninhabited enum:
///
/// ```rust
/// use genums::Family;
///
/// enum Status {}
/// impl Family for Status {}
/// ```
///
/// The family is carried as a phantom type parameter and has no runtime
/// representation. Nothing in this crate can report which family a value
/// belongs to; the family only exists for the type checker.
pub trait Family: 'static {}
