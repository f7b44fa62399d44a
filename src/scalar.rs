//! The closed set of scalar kinds an enum can wrap.
//!
//! [`Scalar`] is sealed: only the four kinds below implement it, and each
//! implementation spells out its own equality and hashing. The kinds are:
//!
//! | Kind      | Scalar type            | `value()` returns |
//! |-----------|------------------------|-------------------|
//! | text      | [`Text`] (`Cow<'static, str>`) | `&str`     |
//! | integer   | `i64`                  | `i64`             |
//! | float     | `f64`                  | `f64`             |
//! | boolean   | `bool`                 | `bool`            |

use std::borrow::Cow;
use std::fmt;
use std::hash::Hasher;

/// The text scalar.
///
/// Borrowed for literals (which lets text constants be minted in `const`
/// context) and owned for text built at runtime.
pub type Text = Cow<'static, str>;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Text {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
    impl Sealed for bool {}
}

/// A scalar kind that can underlie an enum.
///
/// This trait is sealed. The supported kinds are fixed so that equality and
/// encoding are defined per kind rather than derived for arbitrary types.
pub trait Scalar: sealed::Sealed + fmt::Display + fmt::Debug + Clone + Send + Sync + 'static {
    /// What [`Enum::value`](crate::Enum::value) hands back for this kind.
    type View<'a>: Copy
    where
        Self: 'a;

    /// Name of the typed facade, used by `Debug`.
    const FACADE: &'static str;

    /// Borrows the scalar as its view.
    fn view(&self) -> Self::View<'_>;

    /// Kind-specific equality. Must be an equivalence relation.
    fn same(&self, other: &Self) -> bool;

    /// Feeds the scalar into a hasher consistently with [`Scalar::same`].
    fn digest<H: Hasher>(&self, state: &mut H);

    /// Writes the textual form used by `Display` and `encode`.
    fn write_text(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, formatter)
    }
}
