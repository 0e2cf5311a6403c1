//! Filters selecting items by name

use super::Filter;
use crate::error::Result;
use crate::regex::Regex;

/// An item addressable by name
pub trait Named {
    fn name(&self) -> &str;
}

/// Matches items whose name equals the given one exactly
#[derive(Debug, Clone)]
pub struct NameIs {
    name: String,
}

impl NameIs {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl<T: Named> Filter<T> for NameIs {
    fn matches(&self, item: &T) -> bool {
        item.name() == self.name
    }
}

/// Matches items whose whole name matches a regular expression
#[derive(Debug, Clone)]
pub struct NameLike {
    pattern: Regex,
}

impl NameLike {
    pub fn new(expression: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(expression)?,
        })
    }

    pub fn from_regex(pattern: Regex) -> Self {
        Self { pattern }
    }
}

impl<T: Named> Filter<T> for NameLike {
    fn matches(&self, item: &T) -> bool {
        self.pattern.matches(item.name())
    }
}
