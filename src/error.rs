use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtensionError {
    #[error("Element at position {index} repeats the key of an earlier element")]
    Duplicate { index: usize },

    #[error("Element at position {index} maps to a key that is already taken, the key selector is not invertible")]
    KeyCollision { index: usize },

    #[error("Invalid type name {0:?}, expected `.`-separated identifiers")]
    InvalidTypeName(String),

    #[error("Type {0} is already declared in this table")]
    DuplicateType(String),

    #[error("Invalid type relation: {0}")]
    InvalidRelation(String),

    #[error("Unknown type {0}")]
    UnknownType(String),

    #[error("Rust type with {0} is not bound to any entry in this table")]
    UnboundType(String),
}
