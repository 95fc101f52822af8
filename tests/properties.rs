//! End to end checks of the public surface against the documented sequence properties.

use std::{cell::Cell, collections::HashMap};

use extra_extensions::{
    Cursor, ExtensionError, IteratorExt, Seek, TypeDecl, TypeTable, nullable_sequence_equal,
};

#[test]
fn cached_replays_without_repulling() {
    let source = vec![4, 8, 15, 16, 23, 42];
    let pulls = Cell::new(0);
    let cached = source
        .clone()
        .into_iter()
        .inspect(|_| pulls.set(pulls.get() + 1))
        .cached();

    for _ in 0..5 {
        assert_eq!(cached.iter().collect::<Vec<_>>(), source);
    }

    assert_eq!(pulls.get(), source.len());
    assert!(cached.is_exhausted());
}

#[test]
fn cached_cursor_and_iterators_agree() {
    let cached = "memo".chars().cached();
    let mut cursor = cached.cursor().expect("Found <eof>");
    let mut seen = vec![cursor.data().expect("Cursor is missing data")];

    while let Some(next) = cursor.seek(Seek::Right(1)).expect("Error seeking") {
        seen.push(next.data().expect("Cursor is missing data"));
        cursor = next;
    }

    assert_eq!(seen, cached.iter().collect::<Vec<_>>());
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn concat_selection_examples() {
    let out = [1, 2, 3]
        .into_iter()
        .concat_selection(|x| vec![x * 10])
        .collect::<Vec<_>>();
    assert_eq!(out, vec![1, 2, 3, 10, 20, 30]);

    let empty = std::iter::empty::<i32>()
        .concat_selection(|x| vec![x * 10])
        .collect::<Vec<_>>();
    assert!(empty.is_empty());
}

#[test]
fn nullable_equality_examples() {
    assert!(nullable_sequence_equal(Some([1, 2]), Some([1, 2])));
    assert!(nullable_sequence_equal::<[i32; 1], [i32; 1]>(None, None));
    assert!(!nullable_sequence_equal(None::<[i32; 1]>, Some([1])));
    assert!(!nullable_sequence_equal(Some([1, 2]), Some([2, 1])));
}

#[test]
fn duplicate_rejection_examples() {
    let failed = [1, 2, 2, 3]
        .into_iter()
        .fail_on_duplicates()
        .collect::<Result<Vec<_>, _>>();
    assert_eq!(failed, Err(ExtensionError::Duplicate { index: 2 }));

    let passed = [1, 2, 3]
        .into_iter()
        .fail_on_duplicates()
        .collect::<Result<Vec<_>, _>>();
    assert_eq!(passed, Ok(vec![1, 2, 3]));
}

#[test]
fn inverse_mapping_examples() {
    let map = ["a", "bb"]
        .into_iter()
        .to_map_inverse(|s| [s.len()])
        .expect("Lengths are distinct");
    assert_eq!(map, HashMap::from([(1, "a"), (2, "bb")]));

    let collision = ["a", "b"].into_iter().to_map_inverse(|s| [s.len()]);
    assert!(matches!(
        collision,
        Err(ExtensionError::KeyCollision { .. })
    ));
}

#[test]
fn base_type_walk_example() {
    let mut table = TypeTable::new();
    let disposable = table
        .declare(TypeDecl::interface("IDisposable"))
        .expect("Failed to declare IDisposable");
    let stream = table
        .declare(TypeDecl::class("IO.Stream").mark_abstract().implements(disposable))
        .expect("Failed to declare Stream");
    let buffered = table
        .declare(TypeDecl::class("IO.BufferedStream").extends(stream))
        .expect("Failed to declare BufferedStream");
    let file = table
        .declare(TypeDecl::class("IO.FileStream").extends(buffered).implements(disposable))
        .expect("Failed to declare FileStream");

    let walk = table
        .all_base_types(file)
        .expect("FileStream is declared")
        .map(|t| t.name())
        .collect::<Vec<_>>();

    assert_eq!(
        walk,
        vec!["IO.FileStream", "IO.BufferedStream", "IO.Stream", "IDisposable"]
    );
}
