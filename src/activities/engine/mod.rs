//! Parallel execution of activities over a fixed worker pool

pub mod callable;
pub mod pool;

pub use callable::ActivityCallable;
pub use pool::{ActivityEngine, TaskHandle};
