//! The primitive value core shared by every typed facade.
//!
//! [`Enum<V, F>`] wraps one scalar `V` and carries the family `F` as a
//! phantom type. It is immutable, has no identity beyond its scalar, and can
//! only be created by a [`Factory`](crate::Factory).
//!
//! # Examples
//!
//! ```rust
//! use genums::{EnumInt, Family, IntFactory};
//!
//! enum Priority {}
//! impl Family for Priority {}
//!
//! const PRIORITIES: IntFactory<Priority> = IntFactory::new();
//! const LOW: EnumInt<Priority> = PRIORITIES.mint_const(1);
//! const HIGH: EnumInt<Priority> = PRIORITIES.mint_const(10);
//!
//! assert_eq!(HIGH.value(), 10);
//! assert!(LOW.is_equal(&PRIORITIES.mint(1)));
//! assert!(!LOW.is_equal(&HIGH));
//! assert!(!LOW.is_equal(None));
//! assert_eq!(HIGH.encode(), "\"10\"");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::family::Family;
use crate::scalar::Scalar;

/// An immutable enum value of scalar kind `V` bound to family `F`.
///
/// Values of different families never unify, even when the scalar kind and
/// the scalar itself are the same. There is no public constructor; values
/// come from [`Factory::mint`](crate::Factory::mint).
///
/// Most code names this type through one of the facade aliases:
/// [`EnumString`](crate::EnumString), [`EnumInt`](crate::EnumInt),
/// [`EnumFloat64`](crate::EnumFloat64) or [`EnumBool`](crate::EnumBool).
pub struct Enum<V, F> {
    value: V,
    family: PhantomData<fn() -> F>,
}

impl<V: Scalar, F: Family> Enum<V, F> {
    /// Wraps `value`. Reachable only through the factories of this crate.
    #[inline]
    pub(crate) const fn from_scalar(value: V) -> Self {
        Self {
            value,
            family: PhantomData,
        }
    }

    /// Returns the wrapped scalar.
    ///
    /// Text values return `&str`; the other kinds return the scalar by copy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use genums::{Family, StringFactory};
    ///
    /// enum Color {}
    /// impl Family for Color {}
    ///
    /// let red = StringFactory::<Color>::new().mint("red");
    /// assert_eq!(red.value(), "red");
    /// ```
    #[inline]
    #[must_use]
    pub fn value(&self) -> V::View<'_> {
        self.value.view()
    }

    /// Returns a reference to the wrapped scalar itself.
    #[inline]
    #[must_use]
    pub const fn scalar(&self) -> &V {
        &self.value
    }

    /// Consumes the value and returns the wrapped scalar.
    #[inline]
    #[must_use]
    pub fn into_scalar(self) -> V {
        self.value
    }

    /// Returns `true` if `other` is present and wraps an equal scalar.
    ///
    /// `other` may be a reference or an `Option` of one, so a missing
    /// counterpart is expressed as `None` and compares unequal. Only values of
    /// the same kind and family are accepted; anything else does not compile.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use genums::{BoolFactory, Family};
    ///
    /// enum Toggle {}
    /// impl Family for Toggle {}
    ///
    /// let toggles = BoolFactory::<Toggle>::new();
    /// let on = toggles.mint(true);
    ///
    /// assert!(on.is_equal(&toggles.mint(true)));
    /// assert!(!on.is_equal(&toggles.mint(false)));
    /// assert!(!on.is_equal(None));
    /// ```
    #[inline]
    #[must_use]
    pub fn is_equal<'a>(&self, other: impl Into<Option<&'a Self>>) -> bool
    where
        Self: 'a,
    {
        other
            .into()
            .is_some_and(|other| self.value.same(&other.value))
    }

    /// Encodes the value as its textual form wrapped in double quotes.
    ///
    /// Every kind is encoded as a quoted string, numbers and booleans
    /// included. Text is inserted verbatim: an embedded `"` is not escaped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use genums::{BoolFactory, Family, Float64Factory, StringFactory};
    ///
    /// enum Flag {}
    /// impl Family for Flag {}
    ///
    /// assert_eq!(StringFactory::<Flag>::new().mint("status").encode(), "\"status\"");
    /// assert_eq!(BoolFactory::<Flag>::new().mint(true).encode(), "\"true\"");
    /// assert_eq!(Float64Factory::<Flag>::new().mint(0.5).encode(), "\"0.5\"");
    /// ```
    #[must_use]
    pub fn encode(&self) -> String {
        format!("\"{self}\"")
    }
}

impl<V: Scalar, F: Family> PartialEq for Enum<V, F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl<V: Scalar, F: Family> Eq for Enum<V, F> {}

impl<V: Scalar, F: Family> Hash for Enum<V, F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.digest(state);
    }
}

impl<V: Scalar, F: Family> Clone for Enum<V, F> {
    #[inline]
    fn clone(&self) -> Self {
        Self::from_scalar(self.value.clone())
    }
}

impl<V: Scalar + Copy, F: Family> Copy for Enum<V, F> {}

impl<V: Scalar, F: Family> fmt::Display for Enum<V, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.write_text(formatter)
    }
}

// Family is erased from the output.
impl<V: Scalar, F: Family> fmt::Debug for Enum<V, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple(V::FACADE)
            .field(&self.value)
            .finish()
    }
}

#[cfg(feature = "serde")]
impl<V: Scalar, F: Family> serde::Serialize for Enum<V, F> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
