//! Extension operations for iterators, comparable values and a reflection-style type table.
//!
//! The two structures with any depth are [`Cached`], a replayable view that pulls every element
//! of its source exactly once, and [`ConcatSelection`], the persistent accumulator behind
//! [`IteratorExt::concat_selection`]. Everything else is a small helper on [`IteratorExt`],
//! [`ComparableExt`], [`Successor`] or [`TypeTable`].
//!
//! ```
//! use extra_extensions::IteratorExt;
//!
//! let cached = (1..=3).cached();
//! assert_eq!(cached.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(cached.iter().sum::<i32>(), 6);
//!
//! let expanded = [1, 2, 3].into_iter().concat_selection(|x| [x * 10]);
//! assert_eq!(expanded.collect::<Vec<_>>(), vec![1, 2, 3, 10, 20, 30]);
//! ```

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]

mod accumulate;
mod cached;
mod compare;
mod cursor;
mod equality;
mod error;
mod iter_ext;
mod reflect;

pub use crate::{
    accumulate::{ConcatSelection, ConcatSelectionIter, SuffixIter},
    cached::{Cached, CachedCursor, CachedIter, TryCached, TryCachedIter},
    compare::{ComparableExt, Successor},
    cursor::{Cursor, Seek},
    equality::{nullable_sequence_equal, nullable_sequence_equal_by},
    error::ExtensionError,
    iter_ext::{FailOnDuplicates, IteratorExt, TakeWhileAggregate, to_singleton_set},
    reflect::{
        AllBaseTypes, Attributed, MemberInfo, MemberKind, ParameterInfo, ROOT_TYPE_NAME, TypeDecl,
        TypeInfo, TypeKey, TypeTable,
    },
};
