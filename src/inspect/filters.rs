//! Filters over member descriptors

use super::{MemberInfo, MemberKind};
use crate::filters::Filter;

/// Matches field members
#[derive(Debug, Clone, Copy, Default)]
pub struct IsField;

impl Filter<MemberInfo> for IsField {
    fn matches(&self, member: &MemberInfo) -> bool {
        member.kind == MemberKind::Field
    }
}

/// Matches method members
#[derive(Debug, Clone, Copy, Default)]
pub struct IsMethod;

impl Filter<MemberInfo> for IsMethod {
    fn matches(&self, member: &MemberInfo) -> bool {
        member.kind == MemberKind::Method
    }
}

/// Matches static members
#[derive(Debug, Clone, Copy, Default)]
pub struct IsStatic;

impl Filter<MemberInfo> for IsStatic {
    fn matches(&self, member: &MemberInfo) -> bool {
        member.is_static
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_filters() {
        let field = MemberInfo::field("count", "i32");
        let method = MemberInfo::static_method("build", "fn() -> Self");
        assert!(IsField.matches(&field));
        assert!(!IsField.matches(&method));
        assert!(IsMethod.matches(&method));
        assert!(IsStatic.matches(&method));
        assert!(!IsStatic.matches(&field));
    }
}
