//! The activity abstraction and submitted-work descriptors

use std::fmt;
use std::sync::Arc;

use super::context::ActivityContext;
use super::types::ActivityData;
use crate::error::ActivityError;

/// A polymorphic unit of work transforming activity data within a context
pub trait Activity: Send + Sync {
    /// Stable identifier, used in logs and error reports
    fn id(&self) -> &str;

    /// Executes the unit of work
    fn perform(
        &self,
        context: &ActivityContext,
        data: ActivityData,
    ) -> Result<ActivityData, ActivityError>;
}

/// An immutable tuple of activity, context and data describing one unit of
/// submitted work
///
/// The coordinator owns the info until the corresponding callable
/// completes; activity and context are shared, the data element is owned.
#[derive(Clone)]
pub struct ActivityInfo {
    activity: Arc<dyn Activity>,
    context: Arc<ActivityContext>,
    data: ActivityData,
}

impl ActivityInfo {
    pub fn new(
        activity: Arc<dyn Activity>,
        context: Arc<ActivityContext>,
        data: ActivityData,
    ) -> Self {
        Self {
            activity,
            context,
            data,
        }
    }

    pub fn activity(&self) -> &dyn Activity {
        self.activity.as_ref()
    }

    pub fn context(&self) -> &ActivityContext {
        self.context.as_ref()
    }

    pub fn data(&self) -> &ActivityData {
        &self.data
    }

    pub(crate) fn into_parts(self) -> (Arc<dyn Activity>, Arc<ActivityContext>, ActivityData) {
        (self.activity, self.context, self.data)
    }
}

impl fmt::Debug for ActivityInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivityInfo")
            .field("activity", &self.activity.id())
            .field("data", &self.data)
            .finish()
    }
}
