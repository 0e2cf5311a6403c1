//! Vector-to-scalar aggregation over activity data

use serde_json::Value;
use tracing::error;

use super::activity::Activity;
use super::context::ActivityContext;
use super::types::ActivityData;
use crate::error::ActivityError;

/// Whether aggregators reject scalar input unless told otherwise
pub const DEFAULT_STRICT: bool = true;

/// A pure reduction of a vector of values into one scalar
pub trait Aggregate: Send + Sync {
    /// Stable identifier of the reduction, used for logs and errors
    fn id(&self) -> &str;

    /// Reduces the vector's elements into a single value
    fn aggregate(
        &self,
        context: &ActivityContext,
        items: &[Value],
    ) -> Result<Value, ActivityError>;
}

/// Adapts an [`Aggregate`] reduction into an [`Activity`]
///
/// `perform` dispatches on the cardinality of the input: vectors are
/// reduced to a scalar; scalar input fails with a cardinality mismatch in
/// strict mode (the default) and passes through unchanged otherwise.
pub struct Aggregator<A: Aggregate> {
    operation: A,
    strict: bool,
}

impl<A: Aggregate> Aggregator<A> {
    pub fn new(operation: A) -> Self {
        Self {
            operation,
            strict: DEFAULT_STRICT,
        }
    }

    /// Sets whether scalar input is rejected (strict) or passed through
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

impl<A: Aggregate> Activity for Aggregator<A> {
    fn id(&self) -> &str {
        self.operation.id()
    }

    fn perform(
        &self,
        context: &ActivityContext,
        data: ActivityData,
    ) -> Result<ActivityData, ActivityError> {
        match data {
            ActivityData::Vector(items) => {
                let reduced = self.operation.aggregate(context, &items)?;
                Ok(ActivityData::Scalar(reduced))
            }
            ActivityData::Scalar(value) => {
                if self.strict {
                    error!(
                        activity = self.operation.id(),
                        "cardinality mismatch: an aggregator should only be invoked on a collection of values"
                    );
                    Err(ActivityError::CardinalityMismatch {
                        activity: self.operation.id().to_string(),
                    })
                } else {
                    Ok(ActivityData::Scalar(value))
                }
            }
        }
    }
}
