//! Shared documents and the paths that address values inside them

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

/// One step into a value graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

/// The location of a value inside a document, from the root down
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn child_key(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Key(key.to_string()));
        Self { segments }
    }

    pub fn child_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Index(index));
        Self { segments }
    }

    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    pub(crate) fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) if i == 0 => write!(f, "{key}")?,
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// A value graph shared between the visitor and the nodes it hands out
///
/// Nodes read and write through this handle, so mutations made via one
/// node are observed by every other node over the same document.
#[derive(Debug, Clone)]
pub struct Document {
    inner: Arc<RwLock<Value>>,
}

impl Document {
    pub fn new(value: Value) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// A point-in-time copy of the whole document
    pub fn snapshot(&self) -> Value {
        self.inner.read().clone()
    }

    /// Reads the value at `path`, if it still exists
    pub(crate) fn read_at(&self, path: &Path) -> Option<Value> {
        let guard = self.inner.read();
        let mut current = &*guard;
        for segment in path.segments() {
            current = match segment {
                Segment::Key(key) => current.get(key)?,
                Segment::Index(index) => current.get(index)?,
            };
        }
        Some(current.clone())
    }

    /// Replaces the value at `path`; returns false when the path is gone
    pub(crate) fn write_at(&self, path: &Path, value: Value) -> bool {
        let mut guard = self.inner.write();
        let mut current = &mut *guard;
        for segment in path.segments() {
            current = match segment {
                Segment::Key(key) => match current.get_mut(key) {
                    Some(next) => next,
                    None => return false,
                },
                Segment::Index(index) => match current.get_mut(index) {
                    Some(next) => next,
                    None => return false,
                },
            };
        }
        *current = value;
        true
    }
}
