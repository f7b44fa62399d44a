//! Derive macro for genums family markers.
//!
//! A family marker is a caller-declared type that exists only to give a set
//! of enum values its own nominal identity. This crate provides
//! [`Family`](macro@Family), which implements `genums::Family` for such a
//! marker and rejects types that carry data.
//!
//! # Example
//!
//! ```rust,ignore
//! use genums::{Family, StringFactory};
//!
//! #[derive(Family)]
//! enum Color {}
//!
//! const COLORS: StringFactory<Color> = StringFactory::new();
//! let red = COLORS.mint("red");
//! assert_eq!(red.encode(), "\"red\"");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod family;

use proc_macro::TokenStream;

/// Derive macro implementing `genums::Family` for a marker type.
///
/// # Accepted Shapes
///
/// - **Uninhabited enums** (e.g., `enum Color {}`): the preferred form, since
///   no value of the marker can ever exist
/// - **Unit structs** (e.g., `struct Color;`)
/// - **Enums with unit variants only**
/// - **Structs whose fields are all `PhantomData<_>`**, which is how a generic
///   marker mentions its type parameters
///
/// Anything else carries runtime data and is rejected with a compile error
/// pointing at the offending item. Lifetime parameters are rejected because
/// families are `'static`.
///
/// # Generated Code
///
/// ```rust,ignore
/// impl<T: 'static> ::genums::Family for Marker<T> {}
/// ```
///
/// # Example
///
/// ```rust,ignore
/// use std::marker::PhantomData;
/// use genums::Family;
///
/// #[derive(Family)]
/// struct Status;
///
/// #[derive(Family)]
/// struct Scoped<T>(PhantomData<T>);
/// ```
#[proc_macro_derive(Family)]
pub fn derive_family(input: TokenStream) -> TokenStream {
    family::derive_family_impl(input)
}
