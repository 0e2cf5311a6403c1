//! Object-graph visitor with pluggable node factories
//!
//! The visitor walks a JSON value graph depth-first and produces one node
//! handle per reachable value, named by its path (`a.b[2].c`). The
//! [`NodeFactory`] decides whether produced nodes may write back into the
//! shared [`Document`] or are read-only views.

pub mod document;
pub mod factories;
pub mod nodes;

pub use document::{Document, Path, Segment};
pub use factories::{ModifiableNodeFactory, NodeFactory, UnmodifiableNodeFactory};
pub use nodes::{NodeKind, VisitorNode};

use serde_json::Value;
use tracing::debug;

/// Which values of the graph are reported as nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitMode {
    /// Only plain values; containers are traversed silently
    #[default]
    LeavesOnly,
    /// Every value, containers included
    All,
}

/// Walks a document and materializes nodes through a factory
pub struct Visitor<'a> {
    factory: &'a dyn NodeFactory,
    mode: VisitMode,
}

impl<'a> Visitor<'a> {
    pub fn new(factory: &'a dyn NodeFactory) -> Self {
        Self {
            factory,
            mode: VisitMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: VisitMode) -> Self {
        self.mode = mode;
        self
    }

    /// Visits the document depth-first and returns the produced nodes
    pub fn visit(&self, document: &Document) -> Vec<Box<dyn VisitorNode>> {
        let snapshot = document.snapshot();
        let mut nodes = Vec::new();
        self.walk(&snapshot, document, Path::root(), &mut nodes);
        debug!(count = nodes.len(), "visit produced nodes");
        nodes
    }

    fn walk(
        &self,
        value: &Value,
        document: &Document,
        path: Path,
        out: &mut Vec<Box<dyn VisitorNode>>,
    ) {
        match value {
            Value::Object(map) => {
                if self.mode == VisitMode::All {
                    out.push(self.make_node(document, &path));
                }
                for (key, child) in map {
                    self.walk(child, document, path.child_key(key), out);
                }
            }
            Value::Array(items) => {
                if self.mode == VisitMode::All {
                    out.push(self.make_node(document, &path));
                }
                for (index, child) in items.iter().enumerate() {
                    self.walk(child, document, path.child_index(index), out);
                }
            }
            _ => out.push(self.make_node(document, &path)),
        }
    }

    fn make_node(&self, document: &Document, path: &Path) -> Box<dyn VisitorNode> {
        let name = path.to_string();
        match path.last() {
            Some(Segment::Index(_)) => {
                self.factory
                    .make_list_element_node(&name, document, path.clone())
            }
            Some(Segment::Key(_)) => self.factory.make_map_entry_node(&name, document, path.clone()),
            None => self.factory.make_object_node(&name, document, path.clone()),
        }
    }
}
