//! Work items submitted to the worker pool

use std::sync::mpsc::SyncSender;

use tracing::{error, trace};

use crate::activities::activity::ActivityInfo;
use crate::activities::types::ActivityData;
use crate::error::ActivityError;

/// Releases a pool slot when dropped
///
/// The guard is created before the activity runs, so the slot index
/// reaches the completion queue exactly once on every exit path,
/// unwinding included. The queue capacity equals the slot count, so the
/// send can never block; a disconnected coordinator is ignored.
pub(crate) struct SlotGuard {
    index: usize,
    queue: SyncSender<usize>,
}

impl SlotGuard {
    pub(crate) fn new(index: usize, queue: SyncSender<usize>) -> Self {
        Self { index, queue }
    }
}

impl Drop for SlotGuard {
    fn drop(&mut self) {
        let _ = self.queue.send(self.index);
    }
}

/// Wraps one activity invocation for submission to the worker pool
///
/// `call` delegates the business logic to the wrapped activity and keeps
/// the logic needed to signal completion to the coordinator: the slot
/// index is enqueued whether the activity succeeds, fails or panics.
pub struct ActivityCallable {
    index: usize,
    queue: SyncSender<usize>,
    info: ActivityInfo,
}

impl ActivityCallable {
    /// Builds a callable bound to a pool slot and a completion queue
    pub fn new(index: usize, queue: SyncSender<usize>, info: ActivityInfo) -> Self {
        Self { index, queue, info }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Runs the wrapped activity and reports its slot as free
    pub fn call(self) -> Result<ActivityData, ActivityError> {
        let _slot = SlotGuard::new(self.index, self.queue);
        let (activity, context, data) = self.info.into_parts();
        trace!(activity = activity.id(), index = self.index, "activity starting");
        match activity.perform(&context, data) {
            Ok(output) => {
                trace!(activity = activity.id(), index = self.index, "activity complete");
                Ok(output)
            }
            Err(cause) => {
                error!(
                    activity = activity.id(),
                    index = self.index,
                    %cause,
                    "activity failed"
                );
                Err(ActivityError::Failed {
                    activity: activity.id().to_string(),
                    index: self.index,
                    source: Box::new(cause),
                })
            }
        }
    }
}
