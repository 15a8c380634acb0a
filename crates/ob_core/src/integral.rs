//! Integral inputs to truthiness conversion.

/// A primitive integer whose truthiness is "non-zero".
pub trait Integral: Copy {
    fn is_zero(self) -> bool;

    #[inline]
    fn is_truthy(self) -> bool {
        !self.is_zero()
    }
}

macro_rules! impl_integral {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Integral for $ty {
                #[inline]
                fn is_zero(self) -> bool {
                    self == 0
                }
            }
        )*
    };
}

impl_integral!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
