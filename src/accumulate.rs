use std::{
    iter::{Chain, Cloned, Flatten},
    rc::Rc,
    slice, vec,
};

/// Iterator over the elements of a finished [`ConcatSelection`]
pub type ConcatSelectionIter<T, J> = Chain<vec::IntoIter<T>, Flatten<vec::IntoIter<J>>>;

/// Iterator over the expansions of a [`ConcatSelection`], see [`ConcatSelection::suffix`]
pub type SuffixIter<'a, J> = Flatten<Cloned<slice::Iter<'a, J>>>;

/// Persistent accumulator producing every added element first, then the expansion of every added
/// element.
///
/// Expansions are stored as returned by the selector and only traversed once iteration reaches
/// them, so they may be lazy or infinite. Both halves are shared between clones and copied on
/// write, so folding an owned accumulator never copies, while a clone kept aside is left
/// untouched by later [`ConcatSelection::add`] calls.
pub struct ConcatSelection<T, J, F> {
    prefix: Rc<Vec<T>>,
    suffix: Rc<Vec<J>>,
    selector: Rc<F>,
}

impl<T, J, F> ConcatSelection<T, J, F>
where
    T: Clone,
    J: IntoIterator<Item = T> + Clone,
    F: Fn(&T) -> J,
{
    pub fn empty(selector: F) -> Self {
        Self {
            prefix: Rc::new(Vec::new()),
            suffix: Rc::new(Vec::new()),
            selector: Rc::new(selector),
        }
    }

    /// append `element` to the prefix and its expansion to the suffix
    ///
    /// the selector runs here, its output is not traversed until the suffix is read
    pub fn add(mut self, element: T) -> Self {
        let expansion = (self.selector)(&element);
        Rc::make_mut(&mut self.suffix).push(expansion);
        Rc::make_mut(&mut self.prefix).push(element);
        self
    }

    /// expansions of the added elements, grouped by the element that produced them
    pub fn suffix(&self) -> SuffixIter<'_, J> {
        self.suffix.iter().cloned().flatten()
    }

    pub fn iter(&self) -> Chain<Cloned<slice::Iter<'_, T>>, SuffixIter<'_, J>> {
        self.prefix.iter().cloned().chain(self.suffix())
    }
}

impl<T, J, F> ConcatSelection<T, J, F> {
    /// elements added so far, in addition order
    pub fn prefix(&self) -> &[T] {
        &self.prefix
    }

    /// the unevaluated expansions, one per added element
    pub fn expansions(&self) -> &[J] {
        &self.suffix
    }

    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
    }
}

impl<T, J, F> IntoIterator for ConcatSelection<T, J, F>
where
    T: Clone,
    J: IntoIterator<Item = T> + Clone,
{
    type Item = T;
    type IntoIter = ConcatSelectionIter<T, J>;

    fn into_iter(self) -> Self::IntoIter {
        Rc::unwrap_or_clone(self.prefix)
            .into_iter()
            .chain(Rc::unwrap_or_clone(self.suffix).into_iter().flatten())
    }
}

impl<T, J, F> Clone for ConcatSelection<T, J, F> {
    fn clone(&self) -> Self {
        Self {
            prefix: Rc::clone(&self.prefix),
            suffix: Rc::clone(&self.suffix),
            selector: Rc::clone(&self.selector),
        }
    }
}

impl<T: std::fmt::Debug, J, F> std::fmt::Debug for ConcatSelection<T, J, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConcatSelection")
            .field("prefix", &self.prefix)
            .field("expansions", &self.suffix.len())
            .finish_non_exhaustive()
    }
}
