//! Node factories deciding the access policy of produced nodes

use tracing::trace;

use super::document::{Document, Path};
use super::nodes::{ModifiableNode, NodeKind, UnmodifiableNode, VisitorNode};

/// Builds the node handles the visitor hands out
pub trait NodeFactory {
    /// A node for the document root or a plain value
    fn make_object_node(&self, name: &str, document: &Document, path: Path)
        -> Box<dyn VisitorNode>;

    /// A node for an element of an array
    fn make_list_element_node(
        &self,
        name: &str,
        document: &Document,
        path: Path,
    ) -> Box<dyn VisitorNode>;

    /// A node for a member of an object
    fn make_map_entry_node(
        &self,
        name: &str,
        document: &Document,
        path: Path,
    ) -> Box<dyn VisitorNode>;
}

/// Produces nodes that write back through the shared document
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifiableNodeFactory;

impl NodeFactory for ModifiableNodeFactory {
    fn make_object_node(
        &self,
        name: &str,
        document: &Document,
        path: Path,
    ) -> Box<dyn VisitorNode> {
        trace!(name, "returning modifiable object node");
        Box::new(ModifiableNode::new(
            name.to_string(),
            NodeKind::Value,
            document.clone(),
            path,
        ))
    }

    fn make_list_element_node(
        &self,
        name: &str,
        document: &Document,
        path: Path,
    ) -> Box<dyn VisitorNode> {
        trace!(name, "returning modifiable list element node");
        Box::new(ModifiableNode::new(
            name.to_string(),
            NodeKind::ListElement,
            document.clone(),
            path,
        ))
    }

    fn make_map_entry_node(
        &self,
        name: &str,
        document: &Document,
        path: Path,
    ) -> Box<dyn VisitorNode> {
        trace!(name, "returning modifiable map entry node");
        Box::new(ModifiableNode::new(
            name.to_string(),
            NodeKind::MapEntry,
            document.clone(),
            path,
        ))
    }
}

/// Produces read-only nodes; `set` fails with a read-only error
#[derive(Debug, Clone, Copy, Default)]
pub struct UnmodifiableNodeFactory;

impl NodeFactory for UnmodifiableNodeFactory {
    fn make_object_node(
        &self,
        name: &str,
        document: &Document,
        path: Path,
    ) -> Box<dyn VisitorNode> {
        trace!(name, "returning unmodifiable object node");
        Box::new(UnmodifiableNode::new(
            name.to_string(),
            NodeKind::Value,
            document.clone(),
            path,
        ))
    }

    fn make_list_element_node(
        &self,
        name: &str,
        document: &Document,
        path: Path,
    ) -> Box<dyn VisitorNode> {
        trace!(name, "returning unmodifiable list element node");
        Box::new(UnmodifiableNode::new(
            name.to_string(),
            NodeKind::ListElement,
            document.clone(),
            path,
        ))
    }

    fn make_map_entry_node(
        &self,
        name: &str,
        document: &Document,
        path: Path,
    ) -> Box<dyn VisitorNode> {
        trace!(name, "returning unmodifiable map entry node");
        Box::new(UnmodifiableNode::new(
            name.to_string(),
            NodeKind::MapEntry,
            document.clone(),
            path,
        ))
    }
}
