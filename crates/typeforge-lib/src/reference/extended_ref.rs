use typeforge_core::TypeSystem;

use super::TypeContext;
use crate::ExtendedType;

/// A canonical descriptor bound to a resolution context.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ExtendedTypeReference {
    ty: ExtendedType,
    context: TypeContext,
    scope: Option<String>,
    nullable: Option<Vec<bool>>,
}

impl ExtendedTypeReference {
    pub fn new(ty: ExtendedType, context: TypeContext) -> Self {
        Self {
            ty,
            context,
            scope: None,
            nullable: None,
        }
    }

    pub fn ty(&self) -> &ExtendedType {
        &self.ty
    }

    pub fn context(&self) -> TypeContext {
        self.context
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    pub fn nullable(&self) -> Option<&[bool]> {
        self.nullable.as_deref()
    }

    pub fn with_type(&self, ty: ExtendedType) -> Self {
        Self {
            ty,
            ..self.clone()
        }
    }

    pub fn with_context(&self, context: TypeContext) -> Self {
        Self {
            context,
            ..self.clone()
        }
    }

    pub fn with_scope(&self, scope: Option<&str>) -> Self {
        Self {
            scope: scope.map(str::to_owned),
            ..self.clone()
        }
    }

    pub fn with_nullable(&self, nullable: Option<Vec<bool>>) -> Self {
        Self {
            nullable,
            ..self.clone()
        }
    }

    /// `"<context>: <type name>"`.
    pub fn describe<T: TypeSystem + ?Sized>(&self, types: &T) -> String {
        format!("{}: {}", self.context, types.name(self.ty.ty()))
    }
}
