//! Area formulas that work for any numeric type.

use num_traits::{CheckedMul, Num, NumCast};

/// The approximation of π used by the area exercises.
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.14159;

pub fn rectangle_area<T: Num + Copy>(length: T, width: T) -> T {
    length * width
}

pub fn square_area<T: Num + Copy>(side: T) -> T {
    side * side
}

/// `length * width`, or `None` if the product overflows `T`.
pub fn checked_rectangle_area<T: CheckedMul>(length: T, width: T) -> Option<T> {
    length.checked_mul(&width)
}

pub fn checked_square_area<T: CheckedMul>(side: T) -> Option<T> {
    side.checked_mul(&side)
}

/// `PI * r * r`, computed in `f64` and cast back to `T`.
///
/// Integer types truncate toward zero. Returns `None` when the area does not
/// fit in `T`.
pub fn circle_area<T: NumCast + Copy>(radius: T) -> Option<T> {
    let r = radius.to_f64()?;
    T::from(PI * r * r)
}
