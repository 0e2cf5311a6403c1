//! lattice: loosely related utility libraries around an activity framework
//!
//! Provides generic predicate filters, a regular-expression object
//! wrapper, member-metadata queries, an object-graph visitor with
//! pluggable node factories, a properties loader, platform helpers, and a
//! parallel activity execution framework with vector-to-scalar
//! aggregation operators.

// Core infrastructure
pub mod config;
pub mod error;
pub mod library;

// Utility subsystems
pub mod filters;
pub mod inspect;
pub mod os;
pub mod properties;
pub mod regex;

// Object-graph traversal
pub mod visitor;

// Activity execution framework
pub mod activities;

pub use activities::{
    Activity, ActivityContext, ActivityData, ActivityEngine, ActivityInfo, Aggregate, Aggregator,
    And, Or, TaskHandle,
};
pub use config::EngineConfig;
pub use error::{ActivityError, Error, Result};
pub use filters::Filter;
pub use properties::Properties;
pub use regex::Regex;
pub use visitor::{Document, Visitor};
