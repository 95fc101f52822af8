/// Compare two possibly absent sequences element by element.
///
/// Two absent sequences are equal, an absent sequence never equals a present one, and two present
/// sequences are equal when they have the same length and equal elements in the same order.
pub fn nullable_sequence_equal<A, B>(first: Option<A>, second: Option<B>) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: PartialEq<B::Item>,
{
    nullable_sequence_equal_by(first, second, |a, b| a == b)
}

/// like [`nullable_sequence_equal`] with a caller supplied element equality
pub fn nullable_sequence_equal_by<A, B, F>(first: Option<A>, second: Option<B>, mut eq: F) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(&A::Item, &B::Item) -> bool,
{
    let (first, second) = match (first, second) {
        (None, None) => return true,
        (Some(first), Some(second)) => (first, second),
        _ => return false,
    };

    let mut first = first.into_iter();
    let mut second = second.into_iter();

    loop {
        match (first.next(), second.next()) {
            (None, None) => return true,
            (Some(a), Some(b)) if eq(&a, &b) => continue,
            _ => return false,
        }
    }
}
