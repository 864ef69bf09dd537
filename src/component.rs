use std::fmt::{Debug, Display};

use num_traits::{CheckedAdd, CheckedDiv, CheckedRem, CheckedSub, Float, Num, NumCast, Signed, ToPrimitive};

/// Numeric type usable as a coordinate component.
///
/// Built on the `num-traits` numeric hierarchy. Implemented for the primitive
/// integers and floats; the per-type methods cover what differs between them
/// (overflow checks and rounding of quotients).
pub trait Component:
    Num + NumCast + ToPrimitive + Copy + Default + PartialOrd + Debug + Display + Send + Sync + 'static
{
    /// Quotient rounded toward negative infinity. `None` on a zero divisor or overflow.
    fn floor_div(self, rhs: Self) -> Option<Self>;

    /// Plain quotient: truncating for integers, exact for floats.
    fn true_div(self, rhs: Self) -> Option<Self>;

    /// Sum, or `None` when it does not fit in the type.
    fn try_add(self, rhs: Self) -> Option<Self>;

    /// Difference, or `None` when it does not fit in the type.
    fn try_sub(self, rhs: Self) -> Option<Self>;

    /// Lossy conversion for metrics and bounds checks.
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

/// Component types that can hold negative values.
pub trait SignedComponent: Component + Signed {}

impl<T: Component + Signed> SignedComponent for T {}

macro_rules! signed_int_component {
    ($($t:ty),*) => {$(
        impl Component for $t {
            fn floor_div(self, rhs: Self) -> Option<Self> {
                let q = CheckedDiv::checked_div(&self, &rhs)?;
                let r = CheckedRem::checked_rem(&self, &rhs)?;
                if r != 0 && ((r < 0) != (rhs < 0)) {
                    CheckedSub::checked_sub(&q, &1)
                } else {
                    Some(q)
                }
            }

            fn true_div(self, rhs: Self) -> Option<Self> {
                CheckedDiv::checked_div(&self, &rhs)
            }

            fn try_add(self, rhs: Self) -> Option<Self> {
                CheckedAdd::checked_add(&self, &rhs)
            }

            fn try_sub(self, rhs: Self) -> Option<Self> {
                CheckedSub::checked_sub(&self, &rhs)
            }
        }
    )*};
}

macro_rules! unsigned_int_component {
    ($($t:ty),*) => {$(
        impl Component for $t {
            fn floor_div(self, rhs: Self) -> Option<Self> {
                CheckedDiv::checked_div(&self, &rhs)
            }

            fn true_div(self, rhs: Self) -> Option<Self> {
                CheckedDiv::checked_div(&self, &rhs)
            }

            fn try_add(self, rhs: Self) -> Option<Self> {
                CheckedAdd::checked_add(&self, &rhs)
            }

            fn try_sub(self, rhs: Self) -> Option<Self> {
                CheckedSub::checked_sub(&self, &rhs)
            }
        }
    )*};
}

// Floats never overflow into an error; a zero divisor is the only rejected input.
macro_rules! float_component {
    ($($t:ty),*) => {$(
        impl Component for $t {
            fn floor_div(self, rhs: Self) -> Option<Self> {
                self.true_div(rhs).map(Float::floor)
            }

            fn true_div(self, rhs: Self) -> Option<Self> {
                if rhs == 0.0 { None } else { Some(self / rhs) }
            }

            fn try_add(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }

            fn try_sub(self, rhs: Self) -> Option<Self> {
                Some(self - rhs)
            }
        }
    )*};
}

signed_int_component!(i8, i16, i32, i64, isize);
unsigned_int_component!(u8, u16, u32, u64, usize);
float_component!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_floor_div_rounds_down() {
        assert_eq!(5i32.floor_div(2), Some(2));
        assert_eq!((-5i32).floor_div(2), Some(-3));
        assert_eq!(5i32.floor_div(-2), Some(-3));
        assert_eq!((-4i32).floor_div(2), Some(-2));
        assert_eq!(1i32.floor_div(0), None);
    }

    #[test]
    fn test_floor_div_overflow_is_none() {
        assert_eq!(i32::MIN.floor_div(-1), None);
        assert_eq!(i8::MIN.true_div(-1), None);
    }

    #[test]
    fn test_true_div_truncates_integers() {
        assert_eq!((-5i64).true_div(2), Some(-2));
        assert_eq!(7u8.true_div(0), None);
    }

    #[test]
    fn test_float_floor_div() {
        assert_eq!((-5.0f64).floor_div(2.0), Some(-3.0));
        assert_eq!(5.5f32.floor_div(2.0), Some(2.0));
        assert_eq!(1.0f64.floor_div(0.0), None);
    }

    #[test]
    fn test_try_add_and_sub_detect_overflow() {
        assert_eq!(i32::MAX.try_add(1), None);
        assert_eq!(0u16.try_sub(1), None);
        assert_eq!(120i8.try_add(7), Some(127));
        assert_eq!(f32::MAX.try_add(1.0), Some(f32::MAX));
    }

    #[test]
    fn test_cast_rejects_values_that_do_not_fit() {
        assert_eq!(num_traits::cast::<f64, i32>(2.9), Some(2));
        assert_eq!(num_traits::cast::<f64, i32>(-2.9), Some(-2));
        assert_eq!(num_traits::cast::<f64, u8>(-1.0), None);
        assert_eq!(num_traits::cast::<usize, i8>(150), None);
    }
}
