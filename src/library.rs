//! Library trait registry
//!
//! Carries name/version style metadata about a library as an explicitly
//! constructed value that callers pass by reference, with a defined
//! initialization order at the construction site. Nothing here is global
//! or lazily initialized.

use std::collections::HashMap;

/// A metadata trait of a library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibraryTrait {
    Name,
    Version,
    Authors,
    Description,
}

/// Metadata describing one library
#[derive(Debug, Clone, Default)]
pub struct LibraryInfo {
    traits: HashMap<LibraryTrait, String>,
}

impl LibraryInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata of this crate, taken from its manifest
    pub fn from_manifest() -> Self {
        Self::new()
            .with_trait(LibraryTrait::Name, env!("CARGO_PKG_NAME"))
            .with_trait(LibraryTrait::Version, env!("CARGO_PKG_VERSION"))
            .with_trait(LibraryTrait::Authors, env!("CARGO_PKG_AUTHORS"))
            .with_trait(LibraryTrait::Description, env!("CARGO_PKG_DESCRIPTION"))
    }

    pub fn with_trait(mut self, which: LibraryTrait, value: impl Into<String>) -> Self {
        self.traits.insert(which, value.into());
        self
    }

    /// The value of the given trait, if recorded
    pub fn get(&self, which: LibraryTrait) -> Option<&str> {
        self.traits.get(&which).map(String::as_str)
    }
}
