//! Coordinator for parallel activity execution
//!
//! The engine owns a fixed-size worker pool and a bounded completion
//! queue. Each submitted unit of work occupies one slot; workers return
//! their slot index through the queue when they finish, and the engine
//! blocks new submissions until a slot is free again. The queue is the
//! only structure shared between the coordinator and the workers.

use std::collections::VecDeque;
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};

use tracing::{debug, error, trace};

use super::callable::ActivityCallable;
use crate::activities::activity::ActivityInfo;
use crate::activities::types::ActivityData;
use crate::config::EngineConfig;
use crate::error::{ActivityError, Error, Result};

/// Handle onto one submitted unit of work
pub struct TaskHandle {
    activity: String,
    index: usize,
    result: Receiver<std::result::Result<ActivityData, ActivityError>>,
}

impl TaskHandle {
    /// The pool slot the unit runs in
    pub fn index(&self) -> usize {
        self.index
    }

    /// The identifier of the submitted activity
    pub fn activity(&self) -> &str {
        &self.activity
    }

    /// Blocks until the unit delivers its result
    ///
    /// A worker that terminated without delivering (a panicking activity)
    /// surfaces as [`ActivityError::Terminated`]; its slot has still been
    /// released to the engine.
    pub fn join(self) -> std::result::Result<ActivityData, ActivityError> {
        match self.result.recv() {
            Ok(outcome) => outcome,
            Err(_) => Err(ActivityError::Terminated {
                activity: self.activity,
                index: self.index,
            }),
        }
    }
}

/// Executes activities on a fixed worker pool with slot accounting
pub struct ActivityEngine {
    pool: rayon::ThreadPool,
    slots: usize,
    free: VecDeque<usize>,
    in_flight: usize,
    completions: Receiver<usize>,
    release: SyncSender<usize>,
}

impl ActivityEngine {
    /// Builds an engine with default sizing (one worker per CPU)
    pub fn new() -> Result<Self> {
        Self::with_config(&EngineConfig::default())
    }

    /// Builds an engine from an explicit configuration
    pub fn with_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .thread_name(|i| format!("activity-worker-{i}"))
            .panic_handler(|_| error!("activity worker panicked; slot released by guard"))
            .build()
            .map_err(|e| Error::ConfigError(e.to_string()))?;
        // one queue slot per pool slot, so releases can never block
        let (release, completions) = sync_channel(config.slots);
        debug!(workers = config.workers, slots = config.slots, "activity engine ready");
        Ok(Self {
            pool,
            slots: config.slots,
            free: (0..config.slots).collect(),
            in_flight: 0,
            completions,
            release,
        })
    }

    /// The total number of slots
    pub fn capacity(&self) -> usize {
        self.slots
    }

    /// The number of submitted units not yet accounted back
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Submits one unit of work, blocking while all slots are occupied
    pub fn submit(&mut self, info: ActivityInfo) -> std::result::Result<TaskHandle, ActivityError> {
        let index = match self.free.pop_front() {
            Some(index) => index,
            None => self.reclaim()?,
        };
        let activity = info.activity().id().to_string();
        trace!(activity = %activity, index, "submitting activity");
        let (deliver, result) = sync_channel(1);
        let callable = ActivityCallable::new(index, self.release.clone(), info);
        self.pool.spawn(move || {
            let outcome = callable.call();
            let _ = deliver.send(outcome);
        });
        self.in_flight += 1;
        Ok(TaskHandle {
            activity,
            index,
            result,
        })
    }

    /// Blocks until some worker returns its slot
    fn reclaim(&mut self) -> std::result::Result<usize, ActivityError> {
        let index = self
            .completions
            .recv()
            .map_err(|_| ActivityError::PoolUnavailable)?;
        self.in_flight -= 1;
        Ok(index)
    }

    /// Blocks until every in-flight slot has been returned
    pub fn drain(&mut self) -> std::result::Result<(), ActivityError> {
        while self.in_flight > 0 {
            let index = self.reclaim()?;
            self.free.push_back(index);
        }
        Ok(())
    }
}

impl std::fmt::Debug for ActivityEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityEngine")
            .field("slots", &self.slots)
            .field("free", &self.free.len())
            .field("in_flight", &self.in_flight)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activities::activity::Activity;
    use crate::activities::context::ActivityContext;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    struct Sleepy(u64);

    impl Activity for Sleepy {
        fn id(&self) -> &str {
            "test.sleepy"
        }

        fn perform(
            &self,
            _context: &ActivityContext,
            data: ActivityData,
        ) -> std::result::Result<ActivityData, ActivityError> {
            std::thread::sleep(Duration::from_millis(self.0));
            Ok(data)
        }
    }

    struct Panics;

    impl Activity for Panics {
        fn id(&self) -> &str {
            "test.panics"
        }

        fn perform(
            &self,
            _context: &ActivityContext,
            _data: ActivityData,
        ) -> std::result::Result<ActivityData, ActivityError> {
            panic!("deliberate test panic");
        }
    }

    fn info(activity: Arc<dyn Activity>, data: ActivityData) -> ActivityInfo {
        ActivityInfo::new(activity, Arc::new(ActivityContext::new()), data)
    }

    #[test]
    fn submits_beyond_capacity_by_reclaiming_slots() {
        let config = EngineConfig::with_workers(2);
        let mut engine = ActivityEngine::with_config(&config).unwrap();
        let activity: Arc<dyn Activity> = Arc::new(Sleepy(5));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                engine
                    .submit(info(activity.clone(), ActivityData::scalar(i)))
                    .unwrap()
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), ActivityData::Scalar(json!(i)));
        }
        engine.drain().unwrap();
        assert_eq!(engine.in_flight(), 0);
    }

    #[test]
    fn slot_indices_stay_within_capacity() {
        let config = EngineConfig::with_workers(2);
        let mut engine = ActivityEngine::with_config(&config).unwrap();
        let activity: Arc<dyn Activity> = Arc::new(Sleepy(1));
        for i in 0..10 {
            let handle = engine
                .submit(info(activity.clone(), ActivityData::scalar(i)))
                .unwrap();
            assert!(handle.index() < engine.capacity());
            handle.join().unwrap();
        }
        engine.drain().unwrap();
    }

    #[test]
    fn panicking_activity_releases_its_slot() {
        let config = EngineConfig::with_workers(1);
        let mut engine = ActivityEngine::with_config(&config).unwrap();
        let handle = engine
            .submit(info(Arc::new(Panics), ActivityData::scalar(0)))
            .unwrap();
        let err = handle.join().unwrap_err();
        assert!(matches!(err, ActivityError::Terminated { .. }));
        // the slot came back through the completion queue, so the engine
        // accepts further work and drains cleanly
        let handle = engine
            .submit(info(Arc::new(Sleepy(1)), ActivityData::scalar(1)))
            .unwrap();
        assert_eq!(handle.join().unwrap(), ActivityData::Scalar(json!(1)));
        engine.drain().unwrap();
        assert_eq!(engine.in_flight(), 0);
    }
}
