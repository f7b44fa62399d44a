//! Tests for the `#[derive(Family)]` macro.
//!
//! Every accepted marker shape must produce a usable family, and derived
//! families must stay as isolated from each other as hand-written ones.

use genums::{EnumInt, EnumString, Family, IntFactory, StringFactory};
use rstest::rstest;
use std::marker::PhantomData;

// =============================================================================
// Marker Shapes
// =============================================================================

/// Uninhabited enum, the preferred shape
#[derive(Family)]
enum Color {}

/// Unit struct
#[derive(Family)]
#[allow(dead_code)]
struct Status;

/// Enum with unit variants only
#[derive(Family)]
#[allow(dead_code)]
enum Region {
    North,
    South,
}

/// Generic marker using PhantomData
#[derive(Family)]
#[allow(dead_code)]
struct Scoped<T>(PhantomData<T>);

/// Named PhantomData field
#[derive(Family)]
#[allow(dead_code)]
struct Tagged<T> {
    tag: PhantomData<T>,
}

// =============================================================================
// Minting through derived families
// =============================================================================

#[rstest]
fn test_uninhabited_enum_family() {
    let red: EnumString<Color> = StringFactory::new().mint("red");
    assert_eq!(red.encode(), "\"red\"");
}

#[rstest]
fn test_unit_struct_family() {
    let active: EnumString<Status> = StringFactory::new().mint("active");
    assert_eq!(active.raw(), "active");
}

#[rstest]
fn test_unit_variant_enum_family() {
    let code: EnumInt<Region> = IntFactory::new().mint(7);
    assert_eq!(code.value(), 7);
}

#[rstest]
fn test_generic_family() {
    let first: EnumInt<Scoped<u8>> = IntFactory::new().mint(1);
    let named: EnumInt<Tagged<u8>> = IntFactory::new().mint(1);
    assert_eq!(first.encode(), named.encode());
}

// =============================================================================
// Isolation
// =============================================================================

static_assertions::assert_not_impl_any!(EnumString<Color>: PartialEq<EnumString<Status>>);
static_assertions::assert_not_impl_any!(EnumInt<Scoped<u8>>: PartialEq<EnumInt<Scoped<u16>>>);
static_assertions::assert_not_impl_any!(EnumInt<Scoped<u8>>: From<EnumInt<Scoped<u16>>>);
