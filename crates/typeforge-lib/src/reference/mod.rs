//! Type references: a type (syntax node or canonical descriptor) bound to a
//! resolution context, an optional scope and nullability overrides.

mod extended_ref;
mod syntax;
mod type_node;

#[cfg(test)]
mod type_node_tests;

use std::fmt;

pub use extended_ref::ExtendedTypeReference;
pub use syntax::{ReferenceUpdate, SyntaxTypeReference};
pub use type_node::TypeNode;

/// Whether a reference sits in an input or output position.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum TypeContext {
    #[default]
    None,
    Input,
    Output,
}

impl TypeContext {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Input => "Input",
            Self::Output => "Output",
        }
    }
}

impl fmt::Display for TypeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any type reference.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum TypeReference {
    Syntax(SyntaxTypeReference),
    Extended(ExtendedTypeReference),
}

impl TypeReference {
    pub fn context(&self) -> TypeContext {
        match self {
            Self::Syntax(r) => r.context(),
            Self::Extended(r) => r.context(),
        }
    }

    pub fn scope(&self) -> Option<&str> {
        match self {
            Self::Syntax(r) => r.scope(),
            Self::Extended(r) => r.scope(),
        }
    }

    pub fn nullable(&self) -> Option<&[bool]> {
        match self {
            Self::Syntax(r) => r.nullable(),
            Self::Extended(r) => r.nullable(),
        }
    }

    pub fn with_context(&self, context: TypeContext) -> Self {
        match self {
            Self::Syntax(r) => Self::Syntax(r.with_context(context)),
            Self::Extended(r) => Self::Extended(r.with_context(context)),
        }
    }

    pub fn with_scope(&self, scope: Option<&str>) -> Self {
        match self {
            Self::Syntax(r) => Self::Syntax(r.with_scope(scope)),
            Self::Extended(r) => Self::Extended(r.with_scope(scope)),
        }
    }

    pub fn with_nullable(&self, nullable: Option<Vec<bool>>) -> Self {
        match self {
            Self::Syntax(r) => Self::Syntax(r.with_nullable(nullable)),
            Self::Extended(r) => Self::Extended(r.with_nullable(nullable)),
        }
    }

    pub fn as_syntax(&self) -> Option<&SyntaxTypeReference> {
        match self {
            Self::Syntax(r) => Some(r),
            Self::Extended(_) => None,
        }
    }

    pub fn as_extended(&self) -> Option<&ExtendedTypeReference> {
        match self {
            Self::Extended(r) => Some(r),
            Self::Syntax(_) => None,
        }
    }
}

impl From<SyntaxTypeReference> for TypeReference {
    fn from(r: SyntaxTypeReference) -> Self {
        Self::Syntax(r)
    }
}

impl From<ExtendedTypeReference> for TypeReference {
    fn from(r: ExtendedTypeReference) -> Self {
        Self::Extended(r)
    }
}
