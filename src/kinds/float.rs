//! Float facade.
//!
//! Equality is exact-bit equality on the IEEE 754 representation, which is
//! an equivalence relation (unlike `f64`'s own `==`):
//!
//! - a NaN equals a NaN with the same bit pattern
//! - `0.0` and `-0.0` are different values
//!
//! Hashing uses the same bits, so float enums work as map keys.
//!
//! The textual form is the shortest decimal that round-trips, except for
//! infinities, which are written `+Inf` and `-Inf`.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::factory::Factory;
use crate::family::Family;
use crate::scalar::Scalar;
use crate::value::Enum;

facade!(Float64, f64, "64-bit floats");

impl Scalar for f64 {
    type View<'a> = Self;

    const FACADE: &'static str = FLOAT64_FACADE;

    #[inline]
    fn view(&self) -> Self {
        *self
    }

    #[inline]
    fn same(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }

    fn digest<H: Hasher>(&self, state: &mut H) {
        self.to_bits().hash(state);
    }

    fn write_text(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_infinite() {
            formatter.write_str(if self.is_sign_positive() { "+Inf" } else { "-Inf" })
        } else {
            fmt::Display::fmt(self, formatter)
        }
    }
}

impl<F: Family> Enum<f64, F> {
    /// Returns the float. Usable in `const` context.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> f64 {
        *self.scalar()
    }

    /// Returns the raw IEEE 754 bits that equality is defined on.
    #[inline]
    #[must_use]
    pub const fn to_bits(&self) -> u64 {
        self.get().to_bits()
    }
}

impl<F: Family> Factory<f64, F> {
    /// Mints a float value in `const` context.
    #[inline]
    #[must_use]
    pub const fn mint_const(&self, value: f64) -> Enum<f64, F> {
        Enum::from_scalar(value)
    }
}
