use std::{cell::RefCell, iter::FusedIterator};

use log::{debug, trace};

use crate::cursor::{Cursor, Seek};

/// Replayable view over a lazy source.
///
/// Every element is pulled from the source at most once and kept in an append-only buffer, so
/// any number of traversals created with [`Cached::iter`] observe the same sequence. Traversals
/// may be interleaved freely. The wrapper is `!Sync`; wrap it in a mutex to share it between
/// threads.
pub struct Cached<I: Iterator> {
    state: RefCell<CacheState<I::Item, I>>,
}

/// Traversal over a [`Cached`] sequence, yielding buffered elements before pulling new ones.
pub struct CachedIter<'a, I: Iterator> {
    cache: &'a Cached<I>,
    pos: usize,
}

/// Random access position in a [`Cached`] sequence
pub struct CachedCursor<'a, I: Iterator> {
    cache: &'a Cached<I>,
    pos: usize,
}

struct CacheState<T, I> {
    data: Vec<T>,
    /// `None` once the source signalled completion
    head: Option<I>,
}

impl<T, I> CacheState<T, I> {
    fn new(source: I) -> Self {
        Self {
            data: Vec::new(),
            head: Some(source),
        }
    }
}

impl<I: Iterator> From<I> for Cached<I> {
    fn from(value: I) -> Self {
        Self::new(value)
    }
}

impl<I: Iterator> Cached<I> {
    pub fn new<S: IntoIterator<IntoIter = I>>(source: S) -> Self {
        Self {
            state: RefCell::new(CacheState::new(source.into_iter())),
        }
    }

    /// number of elements pulled from the source so far
    pub fn len_cached(&self) -> usize {
        self.state.borrow().data.len()
    }

    /// whether the source has signalled completion, after which the buffer never changes
    pub fn is_exhausted(&self) -> bool {
        self.state.borrow().head.is_none()
    }

    /// returns whether at least `len` elements are buffered, pulling from the source until `len`
    /// is reached or the source runs dry.
    ///
    /// Holds the mutable borrow of the state for the duration of the pull, so a source that
    /// traverses its own wrapper panics instead of corrupting the buffer.
    fn ensure_len(&self, len: usize) -> bool {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;

        while state.data.len() < len {
            let Some(head) = state.head.as_mut() else {
                break;
            };

            match head.next() {
                Some(item) => {
                    trace!("pulled element {} from cached source", state.data.len());
                    state.data.push(item);
                }
                None => {
                    debug!("cached source exhausted after {} elements", state.data.len());
                    state.head = None;
                }
            }
        }

        state.data.len() >= len
    }
}

impl<I: Iterator> Cached<I>
where
    I::Item: Clone,
{
    /// start a new traversal from the first element
    pub fn iter(&self) -> CachedIter<'_, I> {
        CachedIter {
            cache: self,
            pos: 0,
        }
    }

    /// get the element at `idx`, pulling from the source as far as needed
    pub fn get(&self, idx: usize) -> Option<I::Item> {
        let needed = idx.checked_add(1)?;
        if self.ensure_len(needed) {
            self.state.borrow().data.get(idx).cloned()
        } else {
            None
        }
    }

    /// get a cursor at the first element, or `None` for an empty sequence
    pub fn cursor(&self) -> Option<CachedCursor<'_, I>> {
        if self.ensure_len(1) {
            Some(CachedCursor {
                cache: self,
                pos: 0,
            })
        } else {
            None
        }
    }
}

impl<'a, I: Iterator> IntoIterator for &'a Cached<I>
where
    I::Item: Clone,
{
    type Item = I::Item;
    type IntoIter = CachedIter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, I: Iterator> Iterator for CachedIter<'a, I>
where
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.cache.get(self.pos)?;
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let state = self.cache.state.borrow();
        let buffered = state.data.len().saturating_sub(self.pos);

        match &state.head {
            None => (buffered, Some(buffered)),
            Some(head) => {
                let (lo, hi) = head.size_hint();
                (
                    buffered.saturating_add(lo),
                    hi.and_then(|hi| buffered.checked_add(hi)),
                )
            }
        }
    }
}

impl<'a, I: Iterator> FusedIterator for CachedIter<'a, I> where I::Item: Clone {}

impl<'a, I: Iterator> Clone for CachedIter<'a, I> {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache,
            pos: self.pos,
        }
    }
}

impl<'a, I: Iterator> Clone for CachedCursor<'a, I> {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache,
            pos: self.pos,
        }
    }
}

impl<'a, I: Iterator> PartialEq for CachedCursor<'a, I> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.cache, other.cache) && self.pos == other.pos
    }
}

impl<'a, I: Iterator> Eq for CachedCursor<'a, I> {}

impl<'a, I: Iterator> PartialOrd for CachedCursor<'a, I> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if std::ptr::eq(self.cache, other.cache) {
            self.pos.partial_cmp(&other.pos)
        } else {
            None
        }
    }
}

impl<'a, I: Iterator> CachedCursor<'a, I> {
    /// get the position of this cursor
    pub fn pos(&self) -> usize {
        self.pos
    }
}

impl<'a, I: Iterator> Cursor for CachedCursor<'a, I>
where
    I::Item: Clone,
{
    type Item = I::Item;

    fn data(&self) -> anyhow::Result<Self::Item> {
        self.cache
            .get(self.pos)
            .ok_or_else(|| anyhow::anyhow!("Failed to get data at cursor {}: found <eof>", self.pos))
    }

    fn seek(&self, op: Seek) -> anyhow::Result<Option<Self>> {
        let new_pos = match op {
            Seek::Left(x) if x <= self.pos => self.pos - x,
            Seek::Left(_) => return Ok(None),
            Seek::Right(x) => self.pos.checked_add(x).ok_or_else(|| {
                anyhow::anyhow!("Cannot apply {op:?} to cursor at {}, position would overflow", self.pos)
            })?,
        };

        let needed = new_pos
            .checked_add(1)
            .ok_or_else(|| anyhow::anyhow!("Cannot apply {op:?} to cursor at {}, position would overflow", self.pos))?;

        if self.cache.ensure_len(needed) {
            Ok(Some(Self {
                cache: self.cache,
                pos: new_pos,
            }))
        } else {
            Ok(None)
        }
    }
}

impl<I: Iterator> std::fmt::Debug for Cached<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.state.try_borrow() {
            Ok(state) => f
                .debug_struct("Cached")
                .field("len", &state.data.len())
                .field("exhausted", &state.head.is_none())
                .finish(),
            Err(_) => f.debug_struct("Cached").finish_non_exhaustive(),
        }
    }
}

impl<'a, I: Iterator> std::fmt::Debug for CachedCursor<'a, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedCursor")
            .field("cache", self.cache)
            .field("pos", &self.pos)
            .finish()
    }
}

/// Replayable view over a fallible source.
///
/// Only successful elements are buffered. An error is handed to the traversal that pulled it and
/// ends that traversal; the next traversal reaching the same position pulls the source again.
pub struct TryCached<I, T> {
    state: RefCell<CacheState<T, I>>,
}

/// Traversal over a [`TryCached`] sequence
pub struct TryCachedIter<'a, I, T> {
    cache: &'a TryCached<I, T>,
    pos: usize,
    failed: bool,
}

impl<I, T, E> TryCached<I, T>
where
    I: Iterator<Item = Result<T, E>>,
{
    pub fn new<S: IntoIterator<IntoIter = I>>(source: S) -> Self {
        Self {
            state: RefCell::new(CacheState::new(source.into_iter())),
        }
    }

    /// number of successful elements buffered so far
    pub fn len_cached(&self) -> usize {
        self.state.borrow().data.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.state.borrow().head.is_none()
    }

    fn try_ensure_len(&self, len: usize) -> Result<bool, E> {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;

        while state.data.len() < len {
            let Some(head) = state.head.as_mut() else {
                break;
            };

            match head.next() {
                Some(Ok(item)) => {
                    trace!("pulled element {} from fallible cached source", state.data.len());
                    state.data.push(item);
                }
                Some(Err(e)) => {
                    debug!("fallible cached source failed at position {}", state.data.len());
                    return Err(e);
                }
                None => {
                    debug!("fallible cached source exhausted after {} elements", state.data.len());
                    state.head = None;
                }
            }
        }

        Ok(state.data.len() >= len)
    }
}

impl<I, T: Clone, E> TryCached<I, T>
where
    I: Iterator<Item = Result<T, E>>,
{
    pub fn iter(&self) -> TryCachedIter<'_, I, T> {
        TryCachedIter {
            cache: self,
            pos: 0,
            failed: false,
        }
    }

    /// get the element at `idx`; `Ok(None)` past the end of the source
    pub fn get(&self, idx: usize) -> Result<Option<T>, E> {
        let Some(needed) = idx.checked_add(1) else {
            return Ok(None);
        };

        if self.try_ensure_len(needed)? {
            Ok(self.state.borrow().data.get(idx).cloned())
        } else {
            Ok(None)
        }
    }
}

impl<'a, I, T: Clone, E> IntoIterator for &'a TryCached<I, T>
where
    I: Iterator<Item = Result<T, E>>,
{
    type Item = Result<T, E>;
    type IntoIter = TryCachedIter<'a, I, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, I, T: Clone, E> Iterator for TryCachedIter<'a, I, T>
where
    I: Iterator<Item = Result<T, E>>,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.cache.get(self.pos) {
            Ok(Some(item)) => {
                self.pos += 1;
                Some(Ok(item))
            }
            Ok(None) => None,
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl<'a, I, T: Clone, E> FusedIterator for TryCachedIter<'a, I, T> where
    I: Iterator<Item = Result<T, E>>
{
}

impl<I, T> std::fmt::Debug for TryCached<I, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.state.try_borrow() {
            Ok(state) => f
                .debug_struct("TryCached")
                .field("len", &state.data.len())
                .field("exhausted", &state.head.is_none())
                .finish(),
            Err(_) => f.debug_struct("TryCached").finish_non_exhaustive(),
        }
    }
}
