//! Member-metadata descriptors and queries
//!
//! Types opt in by implementing [`Describe`], listing their fields and
//! methods as static [`MemberInfo`] descriptors. The query functions then
//! answer questions like "all instance methods whose name matches a
//! pattern", with any [`Filter`] narrowing the result.

pub mod filters;

pub use filters::{IsField, IsMethod, IsStatic};

use crate::filters::{Filter, Named};

/// The kind of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Field,
    Method,
}

/// Static description of one member of a type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberInfo {
    pub name: &'static str,
    pub kind: MemberKind,
    pub is_static: bool,
    pub type_name: &'static str,
}

impl MemberInfo {
    pub const fn field(name: &'static str, type_name: &'static str) -> Self {
        Self {
            name,
            kind: MemberKind::Field,
            is_static: false,
            type_name,
        }
    }

    pub const fn static_field(name: &'static str, type_name: &'static str) -> Self {
        Self {
            name,
            kind: MemberKind::Field,
            is_static: true,
            type_name,
        }
    }

    pub const fn method(name: &'static str, type_name: &'static str) -> Self {
        Self {
            name,
            kind: MemberKind::Method,
            is_static: false,
            type_name,
        }
    }

    pub const fn static_method(name: &'static str, type_name: &'static str) -> Self {
        Self {
            name,
            kind: MemberKind::Method,
            is_static: true,
            type_name,
        }
    }
}

impl Named for MemberInfo {
    fn name(&self) -> &str {
        self.name
    }
}

/// A type that exposes its member metadata
pub trait Describe {
    fn members() -> &'static [MemberInfo];
}

fn query<T: Describe>(
    kind: MemberKind,
    is_static: bool,
    filter: Option<&dyn Filter<MemberInfo>>,
) -> Vec<&'static MemberInfo> {
    T::members()
        .iter()
        .filter(|member| member.kind == kind && member.is_static == is_static)
        .filter(|member| filter.map_or(true, |f| f.matches(member)))
        .collect()
}

/// Non-static fields of `T`, narrowed by an optional filter
pub fn instance_fields<T: Describe>(
    filter: Option<&dyn Filter<MemberInfo>>,
) -> Vec<&'static MemberInfo> {
    query::<T>(MemberKind::Field, false, filter)
}

/// Non-static methods of `T`, narrowed by an optional filter
pub fn instance_methods<T: Describe>(
    filter: Option<&dyn Filter<MemberInfo>>,
) -> Vec<&'static MemberInfo> {
    query::<T>(MemberKind::Method, false, filter)
}

/// Static fields of `T`, narrowed by an optional filter
pub fn static_fields<T: Describe>(
    filter: Option<&dyn Filter<MemberInfo>>,
) -> Vec<&'static MemberInfo> {
    query::<T>(MemberKind::Field, true, filter)
}

/// Static methods of `T`, narrowed by an optional filter
pub fn static_methods<T: Describe>(
    filter: Option<&dyn Filter<MemberInfo>>,
) -> Vec<&'static MemberInfo> {
    query::<T>(MemberKind::Method, true, filter)
}
