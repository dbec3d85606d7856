use std::fmt;

/// Parsed schema-language type expression.
///
/// Produced by an external parser; compared structurally.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum TypeNode {
    /// `Name`
    Named(String),
    /// `[T]`
    List(Box<TypeNode>),
    /// `T!`
    NonNull(Box<TypeNode>),
}

impl TypeNode {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn list(element: TypeNode) -> Self {
        Self::List(Box::new(element))
    }

    /// `T!`. Already non-null nodes are returned unchanged.
    pub fn non_null(inner: TypeNode) -> Self {
        match inner {
            Self::NonNull(_) => inner,
            other => Self::NonNull(Box::new(other)),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self.nullable_type(), Self::List(_))
    }

    /// The node without an outer `!`.
    pub fn nullable_type(&self) -> &TypeNode {
        match self {
            Self::NonNull(inner) => &**inner,
            other => other,
        }
    }

    /// Name of the innermost named type.
    pub fn named_type(&self) -> &str {
        let mut current = self;
        loop {
            match current {
                Self::Named(name) => return name,
                Self::List(inner) | Self::NonNull(inner) => current = &**inner,
            }
        }
    }

    /// Apply per-level nullability, outermost level first.
    ///
    /// `true` makes a level nullable, `false` non-null. Levels past the
    /// override list keep their syntax; overrides past the deepest list
    /// level are ignored.
    pub fn with_nullability(&self, overrides: &[bool]) -> TypeNode {
        let Some((&nullable, rest)) = overrides.split_first() else {
            return self.clone();
        };

        let rewritten = match self.nullable_type() {
            Self::List(element) => Self::list(element.with_nullability(rest)),
            other => other.clone(),
        };

        if nullable {
            rewritten
        } else {
            Self::non_null(rewritten)
        }
    }
}

impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::List(element) => write!(f, "[{element}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
