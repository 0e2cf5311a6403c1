//! Node handles produced while visiting a document

use serde_json::Value;

use super::document::{Document, Path};
use crate::error::VisitorError;

/// How a node is addressed inside its parent container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The document root or a plain value
    Value,
    /// An element of an array
    ListElement,
    /// A member of an object
    MapEntry,
}

/// A handle onto one value of a visited document
pub trait VisitorNode {
    /// The dotted path name of the value, e.g. `a.b[2].c`
    fn name(&self) -> &str;

    /// How the value is addressed inside its parent
    fn kind(&self) -> NodeKind;

    /// The current value; fails when the path has since been removed
    fn get(&self) -> Result<Value, VisitorError>;

    /// Replaces the value in the underlying document
    fn set(&self, value: Value) -> Result<(), VisitorError>;
}

/// A node that writes back through the shared document
pub struct ModifiableNode {
    name: String,
    kind: NodeKind,
    document: Document,
    path: Path,
}

impl ModifiableNode {
    pub(crate) fn new(name: String, kind: NodeKind, document: Document, path: Path) -> Self {
        Self {
            name,
            kind,
            document,
            path,
        }
    }
}

impl VisitorNode for ModifiableNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn get(&self) -> Result<Value, VisitorError> {
        self.document
            .read_at(&self.path)
            .ok_or_else(|| VisitorError::PathNotFound {
                path: self.name.clone(),
            })
    }

    fn set(&self, value: Value) -> Result<(), VisitorError> {
        if self.document.write_at(&self.path, value) {
            Ok(())
        } else {
            Err(VisitorError::PathNotFound {
                path: self.name.clone(),
            })
        }
    }
}

/// A node rejecting every mutation
pub struct UnmodifiableNode {
    name: String,
    kind: NodeKind,
    document: Document,
    path: Path,
}

impl UnmodifiableNode {
    pub(crate) fn new(name: String, kind: NodeKind, document: Document, path: Path) -> Self {
        Self {
            name,
            kind,
            document,
            path,
        }
    }
}

impl VisitorNode for UnmodifiableNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn get(&self) -> Result<Value, VisitorError> {
        self.document
            .read_at(&self.path)
            .ok_or_else(|| VisitorError::PathNotFound {
                path: self.name.clone(),
            })
    }

    fn set(&self, _value: Value) -> Result<(), VisitorError> {
        Err(VisitorError::ReadOnlyNode {
            path: self.name.clone(),
        })
    }
}
