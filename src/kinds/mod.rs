//! Typed facades, one per scalar kind.
//!
//! Each facade fixes the scalar kind of [`Enum`](crate::Enum) and
//! [`Factory`](crate::Factory), reviews equality and hashing for that kind,
//! and adds the accessors that make sense for it:
//!
//! - [`EnumString`] / [`StringFactory`]: text, with [`raw`](crate::Enum::raw)
//! - [`EnumInt`] / [`IntFactory`]: `i64`
//! - [`EnumFloat64`] / [`Float64Factory`]: `f64`, compared bit for bit
//! - [`EnumBool`] / [`BoolFactory`]: `bool`
//!
//! Every factory also has a `const fn mint_const`, so families are usually
//! written as a handful of `const` items:
//!
//! ```rust
//! use genums::{EnumFloat64, Family, Float64Factory};
//!
//! enum Threshold {}
//! impl Family for Threshold {}
//!
//! const THRESHOLDS: Float64Factory<Threshold> = Float64Factory::new();
//! const FREEZING: EnumFloat64<Threshold> = THRESHOLDS.mint_const(0.0);
//! const BOILING: EnumFloat64<Threshold> = THRESHOLDS.mint_const(100.0);
//!
//! assert_eq!(BOILING.encode(), "\"100\"");
//! assert!(!FREEZING.is_equal(&BOILING));
//! ```

/// Declares the value and factory aliases of one facade.
macro_rules! facade {
    ($kind:ident, $scalar:ty, $description:literal) => {
        paste::paste! {
            #[doc = "An enum value over " $description ", bound to family `F`."]
            pub type [<Enum $kind>]<F> = $crate::value::Enum<$scalar, F>;

            #[doc = "Mints " $description " enum values for family `F`."]
            pub type [<$kind Factory>]<F> = $crate::factory::Factory<$scalar, F>;

            const [<$kind:upper _FACADE>]: &str = stringify!([<Enum $kind>]);
        }
    };
}

mod boolean;
mod float;
mod integer;
mod text;

pub use boolean::{BoolFactory, EnumBool};
pub use float::{EnumFloat64, Float64Factory};
pub use integer::{EnumInt, IntFactory};
pub use text::{EnumString, StringFactory};
