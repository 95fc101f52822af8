use std::{
    collections::{HashMap, HashSet, hash_map::Entry},
    hash::{BuildHasher, Hash, Hasher},
    iter::{Chain, FusedIterator},
    option,
};

use itertools::Either;
use log::debug;
use rustc_hash::{FxBuildHasher, FxHashSet};

use crate::{
    accumulate::{ConcatSelection, ConcatSelectionIter},
    cached::{Cached, TryCached},
    error::ExtensionError,
};

/// Extension operations available on every [`Iterator`]
pub trait IteratorExt: Iterator + Sized {
    /// wrap this iterator so it can be traversed any number of times, pulling each element once
    fn cached(self) -> Cached<Self> {
        Cached::new(self)
    }

    /// like [`IteratorExt::cached`] for a fallible source, errors are never buffered
    fn try_cached<T, E>(self) -> TryCached<Self, T>
    where
        Self: Iterator<Item = Result<T, E>>,
    {
        TryCached::new(self)
    }

    /// every element of this iterator in order, followed by the expansion of every element,
    /// grouped by the element that produced it
    ///
    /// every expansion is created up front but only traversed once the output reaches it
    fn concat_selection<F, J>(self, selector: F) -> ConcatSelectionIter<Self::Item, J>
    where
        Self::Item: Clone,
        F: Fn(&Self::Item) -> J,
        J: IntoIterator<Item = Self::Item> + Clone,
    {
        self.fold(ConcatSelection::empty(selector), ConcatSelection::add)
            .into_iter()
    }

    /// pass elements through unchanged, failing at the first element equal to an earlier one
    fn fail_on_duplicates(self) -> FailOnDuplicates<Self, Self::Item, fn(&Self::Item) -> Self::Item>
    where
        Self::Item: Clone + Eq + Hash,
    {
        let identity: fn(&Self::Item) -> Self::Item = Clone::clone;
        self.fail_on_duplicates_by(identity)
    }

    /// pass elements through unchanged, failing at the first element whose key was already seen
    fn fail_on_duplicates_by<K, F>(self, key: F) -> FailOnDuplicates<Self, K, F>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        FailOnDuplicates {
            iter: self,
            key,
            seen: FxHashSet::default(),
            index: 0,
            failed: false,
        }
    }

    /// map every key produced by `keys` back to the element that produced it
    ///
    /// fails as soon as a key is produced twice, since the selector then has no inverse
    fn to_map_inverse<K, KI, KF>(self, keys: KF) -> Result<HashMap<K, Self::Item>, ExtensionError>
    where
        Self::Item: Clone,
        K: Eq + Hash,
        KI: IntoIterator<Item = K>,
        KF: FnMut(&Self::Item) -> KI,
    {
        self.to_map_inverse_with(keys, |element: &Self::Item| element.clone())
    }

    /// like [`IteratorExt::to_map_inverse`], storing `value(element)` instead of the element
    fn to_map_inverse_with<K, V, KI, KF, VF>(
        self,
        mut keys: KF,
        mut value: VF,
    ) -> Result<HashMap<K, V>, ExtensionError>
    where
        K: Eq + Hash,
        V: Clone,
        KI: IntoIterator<Item = K>,
        KF: FnMut(&Self::Item) -> KI,
        VF: FnMut(&Self::Item) -> V,
    {
        let mut map = HashMap::new();

        for (index, element) in self.enumerate() {
            let v = value(&element);
            for key in keys(&element) {
                match map.entry(key) {
                    Entry::Occupied(_) => {
                        debug!("inverse map key collision at element {index}");
                        return Err(ExtensionError::KeyCollision { index });
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(v.clone());
                    }
                }
            }
        }

        Ok(map)
    }

    /// group elements under every key produced by `keys`, in element order
    fn to_lookup_inverse<K, KI, KF>(self, keys: KF) -> HashMap<K, Vec<Self::Item>>
    where
        Self::Item: Clone,
        K: Eq + Hash,
        KI: IntoIterator<Item = K>,
        KF: FnMut(&Self::Item) -> KI,
    {
        self.to_lookup_inverse_with(keys, |element: &Self::Item| element.clone())
    }

    fn to_lookup_inverse_with<K, V, KI, KF, VF>(
        self,
        mut keys: KF,
        mut value: VF,
    ) -> HashMap<K, Vec<V>>
    where
        K: Eq + Hash,
        V: Clone,
        KI: IntoIterator<Item = K>,
        KF: FnMut(&Self::Item) -> KI,
        VF: FnMut(&Self::Item) -> V,
    {
        let mut lookup: HashMap<K, Vec<V>> = HashMap::new();

        for element in self {
            let v = value(&element);
            for key in keys(&element) {
                lookup.entry(key).or_default().push(v.clone());
            }
        }

        lookup
    }

    /// collect into a randomly permuted `Vec` using the thread-local generator
    #[cfg(feature = "shuffle")]
    fn shuffle(self) -> Vec<Self::Item> {
        self.shuffle_with(&mut rand::rng())
    }

    /// collect into a `Vec` permuted by `rng`, seeding `rng` reproduces the permutation
    #[cfg(feature = "shuffle")]
    fn shuffle_with<R: rand::Rng + ?Sized>(self, rng: &mut R) -> Vec<Self::Item> {
        use rand::seq::SliceRandom;

        let mut out = self.collect::<Vec<_>>();
        out.shuffle(rng);
        out
    }

    fn append_if<P>(self, element: Self::Item, predicate: P) -> Chain<Self, option::IntoIter<Self::Item>>
    where
        P: FnOnce(&Self::Item) -> bool,
    {
        self.chain(predicate(&element).then_some(element))
    }

    fn append_if_some(self, element: Option<Self::Item>) -> Chain<Self, option::IntoIter<Self::Item>> {
        self.chain(element)
    }

    fn prepend_if<P>(self, element: Self::Item, predicate: P) -> Chain<option::IntoIter<Self::Item>, Self>
    where
        P: FnOnce(&Self::Item) -> bool,
    {
        predicate(&element).then_some(element).into_iter().chain(self)
    }

    fn prepend_if_some(self, element: Option<Self::Item>) -> Chain<option::IntoIter<Self::Item>, Self> {
        element.into_iter().chain(self)
    }

    /// pair each element with its position counted from `origin`
    ///
    /// an element at `usize::MAX` is still paired, only a position past it overflows
    fn index_from(self, origin: usize) -> impl Iterator<Item = (usize, Self::Item)> {
        self.enumerate().map(move |(i, element)| (origin + i, element))
    }

    /// whether this iterator yields exactly one element, pulls at most two
    fn is_singleton(mut self) -> bool {
        self.next().is_some() && self.next().is_none()
    }

    fn not_all<P>(mut self, predicate: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        !self.all(predicate)
    }

    fn not_any<P>(mut self, predicate: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        !self.any(predicate)
    }

    fn is_empty_sequence(mut self) -> bool {
        self.next().is_none()
    }

    fn filter_not<P>(self, mut predicate: P) -> impl Iterator<Item = Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter(move |element| !predicate(element))
    }

    /// yield elements while `predicate(&acc, &element)` holds, folding every yielded element into
    /// `acc` with `accumulator`
    fn take_while_aggregate<A, F, P>(
        self,
        seed: A,
        accumulator: F,
        predicate: P,
    ) -> TakeWhileAggregate<Self, A, F, P>
    where
        F: FnMut(A, &Self::Item) -> A,
        P: FnMut(&A, &Self::Item) -> bool,
    {
        TakeWhileAggregate {
            iter: self,
            acc: Some(seed),
            accumulator,
            predicate,
        }
    }

    /// apply `selector` to this iterator only when `flag` holds, otherwise pass it through
    fn then_if<F, J>(self, flag: bool, selector: F) -> Either<J, Self>
    where
        F: FnOnce(Self) -> J,
        J: Iterator<Item = Self::Item>,
    {
        if flag {
            Either::Left(selector(self))
        } else {
            Either::Right(self)
        }
    }

    /// order sensitive hash of every element
    fn sequence_hash(self) -> u64
    where
        Self::Item: Hash,
    {
        self.sequence_hash_with(&FxBuildHasher::default())
    }

    fn sequence_hash_with<S: BuildHasher>(self, build: &S) -> u64
    where
        Self::Item: Hash,
    {
        let mut hasher = build.build_hasher();
        for element in self {
            element.hash(&mut hasher);
        }
        hasher.finish()
    }
}

impl<I: Iterator> IteratorExt for I {}

/// the set containing only `element`
pub fn to_singleton_set<T: Eq + Hash>(element: T) -> HashSet<T> {
    HashSet::from([element])
}

/// Iterator returned by [`IteratorExt::fail_on_duplicates_by`]
///
/// Yields one `Err` at the first repeated key and then ends without pulling further.
pub struct FailOnDuplicates<I, K, F> {
    iter: I,
    key: F,
    seen: FxHashSet<K>,
    index: usize,
    failed: bool,
}

impl<I, K, F> Iterator for FailOnDuplicates<I, K, F>
where
    I: Iterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    type Item = Result<I::Item, ExtensionError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let element = self.iter.next()?;
        let index = self.index;
        self.index += 1;

        if self.seen.insert((self.key)(&element)) {
            Some(Ok(element))
        } else {
            debug!("duplicate key at element {index}");
            self.failed = true;
            Some(Err(ExtensionError::Duplicate { index }))
        }
    }
}

impl<I, K, F> FusedIterator for FailOnDuplicates<I, K, F>
where
    I: Iterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
}

/// Iterator returned by [`IteratorExt::take_while_aggregate`]
pub struct TakeWhileAggregate<I, A, F, P> {
    iter: I,
    /// `None` once the predicate rejected an element
    acc: Option<A>,
    accumulator: F,
    predicate: P,
}

impl<I, A, F, P> TakeWhileAggregate<I, A, F, P> {
    /// the accumulated value, `None` once the predicate has rejected an element
    pub fn accumulated(&self) -> Option<&A> {
        self.acc.as_ref()
    }
}

impl<I, A, F, P> Iterator for TakeWhileAggregate<I, A, F, P>
where
    I: Iterator,
    F: FnMut(A, &I::Item) -> A,
    P: FnMut(&A, &I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let acc = self.acc.as_ref()?;
        let element = self.iter.next()?;

        if !(self.predicate)(acc, &element) {
            self.acc = None;
            return None;
        }

        let acc = self.acc.take()?;
        self.acc = Some((self.accumulator)(acc, &element));
        Some(element)
    }
}
