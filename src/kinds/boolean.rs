//! Boolean facade.

use std::hash::{Hash, Hasher};

use crate::factory::Factory;
use crate::family::Family;
use crate::scalar::Scalar;
use crate::value::Enum;

facade!(Bool, bool, "booleans");

impl Scalar for bool {
    type View<'a> = Self;

    const FACADE: &'static str = BOOL_FACADE;

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

impl<F: Family> Enum<bool, F> {
    /// Returns the boolean. Usable in `const` context.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> bool {
        *self.scalar()
    }
}

impl<F: Family> Factory<bool, F> {
    /// Mints a boolean value in `const` context.
    #[inline]
    #[must_use]
    pub const fn mint_const(&self, value: bool) -> Enum<bool, F> {
        Enum::from_scalar(value)
    }
}
