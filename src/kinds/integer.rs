//! Integer facade.

use std::hash::{Hash, Hasher};

use crate::factory::Factory;
use crate::family::Family;
use crate::scalar::Scalar;
use crate::value::Enum;

facade!(Int, i64, "64-bit integers");

impl Scalar for i64 {
    type View<'a> = Self;

    const FACADE: &'static str = INT_FACADE;

    #[inline]
    fn view(&self) -> Self {
        *self
    }

    #[inline]
    fn same(&self, other: &Self) -> bool {
        self == other
    }

    fn digest<H: Hasher>(&self, state: &mut H) {
        self.hash(state);
    }
}

impl<F: Family> Enum<i64, F> {
    /// Returns the integer. Unlike [`value`](Enum::value), usable in `const` context.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> i64 {
        *self.scalar()
    }
}

impl<F: Family> Factory<i64, F> {
    /// Mints an integer value in `const` context.
    #[inline]
    #[must_use]
    pub const fn mint_const(&self, value: i64) -> Enum<i64, F> {
        Enum::from_scalar(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    enum HttpStatus {}
    impl Family for HttpStatus {}

    const STATUSES: IntFactory<HttpStatus> = IntFactory::new();
    const NOT_FOUND: EnumInt<HttpStatus> = STATUSES.mint_const(404);
    const NOT_FOUND_CODE: i64 = NOT_FOUND.get();

    #[rstest]
    fn test_get_in_const_context() {
        assert_eq!(NOT_FOUND_CODE, 404);
        assert_eq!(NOT_FOUND.value(), 404);
    }

    #[rstest]
    #[case(0, "\"0\"")]
    #[case(404, "\"404\"")]
    #[case(-17, "\"-17\"")]
    #[case(i64::MAX, "\"9223372036854775807\"")]
    #[case(i64::MIN, "\"-9223372036854775808\"")]
    fn test_encode_quotes_decimal_form(#[case] value: i64, #[case] expected: &str) {
        assert_eq!(STATUSES.mint(value).encode(), expected);
    }

    #[rstest]
    fn test_values_are_copy() {
        let first = NOT_FOUND;
        let second = first;
        assert!(first.is_equal(&second));
    }
}
