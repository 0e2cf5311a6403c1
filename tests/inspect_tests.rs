use lattice::filters::{compound::Not, name::NameLike, NameIs};
use lattice::inspect::{
    instance_fields, instance_methods, static_fields, static_methods, Describe, MemberInfo,
};

/// A small record with a private counter and two accessors
struct Record;

impl Describe for Record {
    fn members() -> &'static [MemberInfo] {
        const MEMBERS: &[MemberInfo] = &[
            MemberInfo::static_field("COUNTER", "i32"),
            MemberInfo::field("string", "String"),
            MemberInfo::field("i", "i32"),
            MemberInfo::method("getString", "fn(&self) -> &str"),
            MemberInfo::method("getInt", "fn(&self) -> i32"),
        ];
        MEMBERS
    }
}

/// A wider record extending the members of `Record`
struct WideRecord;

impl Describe for WideRecord {
    fn members() -> &'static [MemberInfo] {
        const MEMBERS: &[MemberInfo] = &[
            MemberInfo::static_field("COUNTER", "i32"),
            MemberInfo::static_field("WIDE_COUNTER", "i32"),
            MemberInfo::field("string", "String"),
            MemberInfo::field("i", "i32"),
            MemberInfo::field("l", "i64"),
            MemberInfo::method("getString", "fn(&self) -> &str"),
            MemberInfo::method("getInt", "fn(&self) -> i32"),
            MemberInfo::method("getLong", "fn(&self) -> i64"),
            MemberInfo::method("getSum", "fn(&self) -> i64"),
            MemberInfo::static_method("build", "fn() -> Self"),
        ];
        MEMBERS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(members: &[&MemberInfo]) -> Vec<&'static str> {
        members.iter().map(|m| m.name).collect()
    }

    #[test]
    fn unfiltered_instance_fields() {
        let fields = instance_fields::<Record>(None);
        assert_eq!(fields.len(), 2);
        assert!(names(&fields).contains(&"string"));
        assert!(names(&fields).contains(&"i"));
    }

    #[test]
    fn instance_fields_can_exclude_by_name() {
        let filter = Not::new(NameIs::new("string"));
        let fields = instance_fields::<WideRecord>(Some(&filter));
        assert_eq!(names(&fields), vec!["i", "l"]);
    }

    #[test]
    fn unfiltered_instance_methods() {
        let methods = instance_methods::<WideRecord>(None);
        assert_eq!(methods.len(), 4);
        assert!(names(&methods).contains(&"getSum"));
    }

    #[test]
    fn methods_filtered_by_name_pattern() {
        let filter = NameLike::new("getS.*").unwrap();
        let methods = instance_methods::<WideRecord>(Some(&filter));
        assert_eq!(names(&methods), vec!["getString", "getSum"]);
    }

    #[test]
    fn methods_excluded_by_name_pattern() {
        let filter = Not::new(NameLike::new("getS.*").unwrap());
        let methods = instance_methods::<WideRecord>(Some(&filter));
        assert_eq!(names(&methods), vec!["getInt", "getLong"]);
    }

    #[test]
    fn static_members_are_separate_from_instance_members() {
        let fields = static_fields::<WideRecord>(None);
        assert_eq!(names(&fields), vec!["COUNTER", "WIDE_COUNTER"]);

        let methods = static_methods::<WideRecord>(None);
        assert_eq!(names(&methods), vec!["build"]);
    }
}
