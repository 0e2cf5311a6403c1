//! Configuration types and validation for the activity engine

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Worker-pool sizing and slot accounting for [`crate::activities::ActivityEngine`]
///
/// `slots` bounds the number of units in flight at once and sets the
/// capacity of the completion queue; it must cover at least the workers
/// so a release can never block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub workers: usize,
    pub slots: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let workers = num_cpus::get();
        Self {
            workers,
            slots: workers,
        }
    }
}

impl EngineConfig {
    /// A configuration with the given worker count and matching slots
    pub fn with_workers(workers: usize) -> Self {
        Self {
            workers,
            slots: workers,
        }
    }

    /// Sets the number of in-flight slots
    pub fn with_slots(mut self, slots: usize) -> Self {
        self.slots = slots;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::ConfigError(
                "engine requires at least one worker".to_string(),
            ));
        }
        if self.slots < self.workers {
            return Err(Error::ConfigError(format!(
                "{} slots cannot cover {} workers",
                self.slots, self.workers
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_workers_is_rejected() {
        assert!(EngineConfig::with_workers(0).validate().is_err());
    }

    #[test]
    fn slots_must_cover_workers() {
        assert!(EngineConfig::with_workers(4).with_slots(2).validate().is_err());
        assert!(EngineConfig::with_workers(4).with_slots(8).validate().is_ok());
    }
}
