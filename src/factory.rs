//! Factories - the only way to mint enum values.
//!
//! A [`Factory<V, F>`] is bound to one scalar kind and one family. It holds
//! no state, so any number of factories for the same pair may exist; what
//! keeps families apart is the type parameter, not the factory instance.
//!
//! # Examples
//!
//! ```rust
//! use genums::{EnumString, Family, StringFactory};
//!
//! enum Color {}
//! impl Family for Color {}
//!
//! const COLORS: StringFactory<Color> = StringFactory::new();
//! const RED: EnumString<Color> = COLORS.mint_const("red");
//! const BLACK: EnumString<Color> = COLORS.mint_const("black");
//!
//! let runtime_red = COLORS.mint(String::from("red"));
//! assert!(RED.is_equal(&runtime_red));
//! assert!(!RED.is_equal(&BLACK));
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::family::Family;
use crate::scalar::Scalar;
use crate::value::Enum;

/// Mints [`Enum<V, F>`] values for one scalar kind and one family.
///
/// Factories are zero-sized, `Copy` and usable in `const` items. Minting
/// performs no validation, interning or bookkeeping: minting the same scalar
/// twice gives two equal values.
pub struct Factory<V, F> {
    binding: PhantomData<fn() -> (V, F)>,
}

impl<V: Scalar, F: Family> Factory<V, F> {
    /// Creates a factory for family `F`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use genums::{Family, IntFactory};
    ///
    /// enum Level {}
    /// impl Family for Level {}
    ///
    /// let levels = IntFactory::<Level>::new();
    /// assert_eq!(levels.mint(3).value(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            binding: PhantomData,
        }
    }

    /// Mints a value of family `F` wrapping `value`.
    ///
    /// Accepts anything that converts into the scalar kind: `&'static str`
    /// or `String` for text, any smaller integer for integers, and so on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use genums::{Family, StringFactory};
    ///
    /// enum Color {}
    /// impl Family for Color {}
    ///
    /// let colors = StringFactory::<Color>::new();
    /// let first = colors.mint("red");
    /// let second = colors.mint("red");
    /// assert!(first.is_equal(&second));
    /// ```
    #[inline]
    #[must_use]
    pub fn mint(&self, value: impl Into<V>) -> Enum<V, F> {
        Enum::from_scalar(value.into())
    }
}

impl<V: Scalar, F: Family> Default for Factory<V, F> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Scalar, F: Family> Clone for Factory<V, F> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: Scalar, F: Family> Copy for Factory<V, F> {}

impl<V: Scalar, F: Family> fmt::Debug for Factory<V, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Factory<{}>", V::FACADE)
    }
}
