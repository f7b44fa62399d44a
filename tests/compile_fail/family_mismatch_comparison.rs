//! Test that values of two families holding the same scalar cannot be compared.

use genums::{Family, IntFactory};

enum Color {}
impl Family for Color {}

enum Paint {}
impl Family for Paint {}

fn main() {
    let red = IntFactory::<Color>::new().mint(1);
    let other_red = IntFactory::<Paint>::new().mint(1);
    let _same = red == other_red;
}
