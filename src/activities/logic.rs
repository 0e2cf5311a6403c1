//! Boolean reductions over vectors of values
//!
//! Elements must be booleans: the reductions never coerce, and any
//! non-boolean element fails the whole aggregation regardless of its
//! position or of the truth value accumulated so far.

use serde_json::Value;
use tracing::error;

use super::aggregator::Aggregate;
use super::context::ActivityContext;
use crate::error::ActivityError;

fn element_as_bool(operator: &str, item: &Value) -> Result<bool, ActivityError> {
    match item {
        Value::Bool(value) => Ok(*value),
        other => {
            error!(
                operator,
                element = %other,
                "arguments to logic operators must be boolean"
            );
            Err(ActivityError::InvalidArgument(
                "arguments to boolean operators must be boolean".to_string(),
            ))
        }
    }
}

/// Logical OR over a vector of booleans; the empty vector reduces to false
#[derive(Debug, Clone, Copy, Default)]
pub struct Or;

impl Aggregate for Or {
    fn id(&self) -> &str {
        "logic.or"
    }

    fn aggregate(
        &self,
        _context: &ActivityContext,
        items: &[Value],
    ) -> Result<Value, ActivityError> {
        let mut result = false;
        // every element is validated even once the outcome is settled
        for item in items {
            result |= element_as_bool(self.id(), item)?;
        }
        Ok(Value::Bool(result))
    }
}

/// Logical AND over a vector of booleans; the empty vector reduces to true
#[derive(Debug, Clone, Copy, Default)]
pub struct And;

impl Aggregate for And {
    fn id(&self) -> &str {
        "logic.and"
    }

    fn aggregate(
        &self,
        _context: &ActivityContext,
        items: &[Value],
    ) -> Result<Value, ActivityError> {
        let mut result = true;
        for item in items {
            result &= element_as_bool(self.id(), item)?;
        }
        Ok(Value::Bool(result))
    }
}
