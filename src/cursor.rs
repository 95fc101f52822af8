/// represents a seek operation for moving a [`Cursor`] with [`Cursor::seek`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Seek {
    /// Seek towards the first element of the sequence
    Left(usize),
    /// Seek towards the end of the sequence
    Right(usize),
}

/// Cheaply clonable handle to a single element of a replayable sequence.
pub trait Cursor: Clone + Sized {
    type Item;

    /// Get the element this cursor refers to, or an error indicating why it could not be
    /// resolved.
    ///
    /// Resolving an element may pull from the underlying source, so this is not guarenteed to be
    /// cheap the first time a position is visited.
    fn data(&self) -> anyhow::Result<Self::Item>;

    /// Get a [`Cursor`] at a position relative to this one, or [`None`] when no element exists
    /// there. Seeking left past the first element also results in [`None`]. A seek whose target
    /// position cannot be represented is an error rather than <eof>.
    fn seek(&self, op: Seek) -> anyhow::Result<Option<Self>>;

    fn next(&self) -> anyhow::Result<Option<Self>> {
        self.seek(Seek::Right(1))
    }

    fn prev(&self) -> anyhow::Result<Option<Self>> {
        self.seek(Seek::Left(1))
    }
}
