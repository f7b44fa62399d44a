//! Test that a value of one scalar kind cannot be used where another kind is expected.

use genums::{EnumInt, Family, Float64Factory};

enum Color {}
impl Family for Color {}

fn main() {
    let _value: EnumInt<Color> = Float64Factory::<Color>::new().mint(1.0);
}
