use num_traits::PrimInt;

/// Remainder with floor semantics, so the result always carries the sign of
/// the divisor. The built-in `%` truncates toward zero, which would make the
/// leap-year test and the day-of-week computation disagree between positive
/// and negative years.
pub(crate) trait RemFloor: Sized {
    fn rem_floor(&self, other: Self) -> Self;
}

impl<T: PrimInt> RemFloor for T {
    fn rem_floor(&self, other: Self) -> Self {
        let zero = Self::zero();
        let one = Self::one();
        if *self > zero && other < zero {
            (*self - one) % other + other + one
        } else if *self < zero && other > zero {
            (*self + one) % other + other - one
        } else {
            *self % other
        }
    }
}
