/// Named comparisons for any [`PartialOrd`] value
pub trait ComparableExt: PartialOrd {
    fn is_less_than(&self, other: &Self) -> bool {
        self < other
    }

    fn is_less_than_or_equal(&self, other: &Self) -> bool {
        self <= other
    }

    fn is_greater_than(&self, other: &Self) -> bool {
        self > other
    }

    fn is_greater_than_or_equal(&self, other: &Self) -> bool {
        self >= other
    }
}

impl<T: PartialOrd + ?Sized> ComparableExt for T {}

pub trait Successor: Sized {
    /// whether `self` is exactly one greater than `other`
    ///
    /// `other` being the maximum value of the type has no successor, so this is `false`
    fn is_successor(self, other: Self) -> bool;
}

macro_rules! impl_successor {
    ($($t:ty),*) => {
        $(
            impl Successor for $t {
                #[inline]
                fn is_successor(self, other: Self) -> bool {
                    other.checked_add(1) == Some(self)
                }
            }
        )*
    };
}

impl_successor!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
