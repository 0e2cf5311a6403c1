//! Ambient state shared across one wave of activity invocations

use dashmap::DashMap;
use serde_json::Value;

/// Key/value state passed by reference through activity invocations
///
/// Ownership is transient: the coordinator constructs the context, shares
/// it with the units it submits, and drops it when the wave completes.
#[derive(Debug, Default)]
pub struct ActivityContext {
    values: DashMap<String, Value>,
}

impl ActivityContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value stored under `key`, if any
    pub fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).map(|entry| entry.value().clone())
    }

    /// Stores a value, returning the previous one
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    /// Removes and returns the value stored under `key`
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.values.remove(key).map(|(_, value)| value)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_get_remove_round_trip() {
        let context = ActivityContext::new();
        assert!(context.is_empty());
        assert_eq!(context.set("threshold", 3), None);
        assert_eq!(context.set("threshold", 5), Some(json!(3)));
        assert_eq!(context.get("threshold"), Some(json!(5)));
        assert!(context.contains("threshold"));
        assert_eq!(context.remove("threshold"), Some(json!(5)));
        assert_eq!(context.len(), 0);
    }
}
