//! Errors raised while populating a `DynamicTypeSystem`.

/// Error during type registration or JSON loading.
#[derive(Debug)]
pub enum TypeSystemError {
    Json(serde_json::Error),
    /// A declaration or reference names a type that was never registered.
    UnknownType(String),
    /// Two declarations use the same name.
    DuplicateType(String),
    /// Instantiation of a type that is not an open generic definition.
    NotGenericDefinition(String),
    /// A raw entry that is neither a declaration, an instantiation nor an array.
    InvalidEntry(String),
    /// Instantiation with the wrong number of arguments.
    ArityMismatch {
        definition: String,
        expected: usize,
        actual: usize,
    },
}

impl std::fmt::Display for TypeSystemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::UnknownType(name) => write!(f, "unknown type: {name}"),
            Self::DuplicateType(name) => write!(f, "type declared twice: {name}"),
            Self::InvalidEntry(msg) => write!(f, "invalid type entry: {msg}"),
            Self::NotGenericDefinition(name) => {
                write!(f, "not a generic type definition: {name}")
            }
            Self::ArityMismatch {
                definition,
                expected,
                actual,
            } => write!(
                f,
                "{definition} expects {expected} type argument(s), got {actual}"
            ),
        }
    }
}

impl std::error::Error for TypeSystemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}
