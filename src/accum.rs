//! Numeric accumulation behind [`sum`](crate::Sequence::sum) and
//! [`product`](crate::Sequence::product).

/// Types that can be accumulated additively and multiplicatively.
///
/// Implemented for the primitive integer and float types. `sum` folds from
/// [`Accumulate::ZERO`] with [`Accumulate::add`]; `product` folds from
/// [`Accumulate::ONE`] with [`Accumulate::mul`].
pub trait Accumulate: Sized {
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;

    fn add(self, other: Self) -> Self;
    fn mul(self, other: Self) -> Self;
}

macro_rules! accumulate_integer {
    ($($ty:ty),*) => {
        $(
            impl Accumulate for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn add(self, other: Self) -> Self {
                    self + other
                }

                #[inline]
                fn mul(self, other: Self) -> Self {
                    self * other
                }
            }
        )*
    };
}

macro_rules! accumulate_float {
    ($($ty:ty),*) => {
        $(
            impl Accumulate for $ty {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline]
                fn add(self, other: Self) -> Self {
                    self + other
                }

                #[inline]
                fn mul(self, other: Self) -> Self {
                    self * other
                }
            }
        )*
    };
}

accumulate_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
accumulate_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identities_are_neutral() {
        assert_eq!(Accumulate::add(41i64, i64::ZERO), 41);
        assert_eq!(Accumulate::mul(41i64, i64::ONE), 41);
        assert_eq!(Accumulate::add(1.5f64, f64::ZERO), 1.5);
    }
}
