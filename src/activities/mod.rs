//! Activity execution framework
//!
//! An [`Activity`] is a unit of work transforming [`ActivityData`] (a
//! scalar or a vector of values) within an [`ActivityContext`]. The
//! [`engine`] submits activities to a fixed worker pool and accounts for
//! completions through a bounded queue; [`aggregator`] and [`logic`]
//! provide the vector-to-scalar reductions.

pub mod activity;
pub mod aggregator;
pub mod context;
pub mod engine;
pub mod logic;
pub mod types;

pub use activity::{Activity, ActivityInfo};
pub use aggregator::{Aggregate, Aggregator, DEFAULT_STRICT};
pub use context::ActivityContext;
pub use engine::{ActivityCallable, ActivityEngine, TaskHandle};
pub use logic::{And, Or};
pub use types::ActivityData;
