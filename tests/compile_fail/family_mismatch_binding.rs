//! Test that a value minted for one family cannot be used where another family is expected.

use genums::{EnumInt, Family, IntFactory};

enum Color {}
impl Family for Color {}

enum Paint {}
impl Family for Paint {}

fn main() {
    let _value: EnumInt<Color> = IntFactory::<Paint>::new().mint(1);
}
