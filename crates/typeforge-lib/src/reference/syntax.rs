use std::fmt;
use std::sync::Arc;

use super::{TypeContext, TypeNode};
use crate::{Error, Result};

/// A parsed type expression bound to a resolution context.
///
/// Immutable. Equality is structural over `(context, scope, nullable,
/// type_node)`; two references built from distinct but identical nodes are
/// equal. Every combinator returns a new reference.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct SyntaxTypeReference {
    type_node: Arc<TypeNode>,
    context: TypeContext,
    scope: Option<String>,
    nullable: Option<Vec<bool>>,
}

/// Partial update for [`SyntaxTypeReference::with`].
///
/// Unset fields keep the current value. Setting the type node to `None` is
/// rejected by `with`.
#[derive(Clone, Default, Debug)]
pub struct ReferenceUpdate {
    type_node: Option<Option<TypeNode>>,
    context: Option<TypeContext>,
    scope: Option<Option<String>>,
    nullable: Option<Option<Vec<bool>>>,
}

impl ReferenceUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn type_node(mut self, type_node: impl Into<Option<TypeNode>>) -> Self {
        self.type_node = Some(type_node.into());
        self
    }

    pub fn context(mut self, context: TypeContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn scope(mut self, scope: Option<&str>) -> Self {
        self.scope = Some(scope.map(str::to_owned));
        self
    }

    pub fn nullable(mut self, nullable: Option<Vec<bool>>) -> Self {
        self.nullable = Some(nullable);
        self
    }
}

impl SyntaxTypeReference {
    /// Fails with `MissingArgument` if `type_node` is `None`.
    pub fn new(type_node: impl Into<Option<TypeNode>>, context: TypeContext) -> Result<Self> {
        let type_node = type_node
            .into()
            .ok_or(Error::MissingArgument("type_node"))?;
        Ok(Self {
            type_node: Arc::new(type_node),
            context,
            scope: None,
            nullable: None,
        })
    }

    pub fn type_node(&self) -> &TypeNode {
        &self.type_node
    }

    pub fn context(&self) -> TypeContext {
        self.context
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Per-level nullability overrides, outermost first.
    pub fn nullable(&self) -> Option<&[bool]> {
        self.nullable.as_deref()
    }

    /// The type node with the nullability overrides applied.
    pub fn rewritten_type_node(&self) -> TypeNode {
        match &self.nullable {
            Some(overrides) => self.type_node.with_nullability(overrides),
            None => TypeNode::clone(&self.type_node),
        }
    }

    pub fn with_type(&self, type_node: impl Into<Option<TypeNode>>) -> Result<Self> {
        let type_node = type_node
            .into()
            .ok_or(Error::MissingArgument("type_node"))?;
        Ok(Self {
            type_node: Arc::new(type_node),
            ..self.clone()
        })
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

    /// Apply several changes at once.
    pub fn with(&self, update: ReferenceUpdate) -> Result<Self> {
        let type_node = match update.type_node {
            Some(Some(node)) => Arc::new(node),
            Some(None) => return Err(Error::MissingArgument("type_node")),
            None => Arc::clone(&self.type_node),
        };
        Ok(Self {
            type_node,
            context: update.context.unwrap_or(self.context),
            scope: update.scope.unwrap_or_else(|| self.scope.clone()),
            nullable: update.nullable.unwrap_or_else(|| self.nullable.clone()),
        })
    }
}

impl fmt::Display for SyntaxTypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.context, self.type_node)
    }
}
