//! Text facade.

use std::borrow::Cow;
use std::hash::{Hash, Hasher};

use crate::factory::Factory;
use crate::family::Family;
use crate::scalar::{Scalar, Text};
use crate::value::Enum;

facade!(String, Text, "text");

impl Scalar for Text {
    type View<'a> = &'a str;

    const FACADE: &'static str = STRING_FACADE;

    #[inline]
    fn view(&self) -> &str {
        self
    }

    // Borrowed and owned text with the same contents are the same value.
    #[inline]
    fn same(&self, other: &Self) -> bool {
        self.view() == other.view()
    }

    fn digest<H: Hasher>(&self, state: &mut H) {
        self.view().hash(state);
    }
}

impl<F: Family> Enum<Text, F> {
    /// Returns the text without the quoting added by [`encode`](Enum::encode).
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
    /// assert_eq!(red.raw(), "red");
    /// assert_eq!(red.encode(), "\"red\"");
    /// ```
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &str {
        self.value()
    }

    /// Returns the text as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.value()
    }

    /// Consumes the value and returns the text as an owned `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.into_scalar().into_owned()
    }
}

impl<F: Family> Factory<Text, F> {
    /// Mints a text value from a literal in `const` context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use genums::{EnumString, Family, StringFactory};
    ///
    /// enum Status {}
    /// impl Family for Status {}
    ///
    /// const ACTIVE: EnumString<Status> = StringFactory::new().mint_const("active");
    /// assert_eq!(ACTIVE.raw(), "active");
    /// ```
    #[inline]
    #[must_use]
    pub const fn mint_const(&self, value: &'static str) -> Enum<Text, F> {
        Enum::from_scalar(Cow::Borrowed(value))
    }
}
