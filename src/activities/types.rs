//! Data flowing through an activity graph

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A value or an ordered collection of values
///
/// Aggregating activities require the `Vector` variant unless explicitly
/// configured to tolerate scalar pass-through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActivityData {
    Scalar(Value),
    Vector(Vec<Value>),
}

impl ActivityData {
    pub fn scalar(value: impl Into<Value>) -> Self {
        Self::Scalar(value.into())
    }

    pub fn vector<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Vector(items.into_iter().map(Into::into).collect())
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    pub fn is_vector(&self) -> bool {
        matches!(self, Self::Vector(_))
    }

    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::Vector(_) => None,
        }
    }

    pub fn as_vector(&self) -> Option<&[Value]> {
        match self {
            Self::Scalar(_) => None,
            Self::Vector(items) => Some(items),
        }
    }

    /// The number of carried values: 1 for a scalar
    pub fn cardinality(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Vector(items) => items.len(),
        }
    }
}

impl From<Value> for ActivityData {
    fn from(value: Value) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<Value>> for ActivityData {
    fn from(items: Vec<Value>) -> Self {
        Self::Vector(items)
    }
}
