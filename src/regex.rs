//! Regular expression objects with whole-string matching and group capture

use std::fmt;
use std::hash::{Hash, Hasher};

use ::regex::{Regex as RawRegex, RegexBuilder};
use tracing::trace;

use crate::error::Result;

/// Whether regular expressions are case sensitive unless stated otherwise
pub const DEFAULT_CASE_SENSITIVITY: bool = true;

/// A pattern that matches any input
pub const MATCH_ALL: &str = ".*";

/// A regular expression as a value object
///
/// `matches` tests the whole input string, `all_matches` scans the input
/// and returns the capture groups of every occurrence. Two `Regex` values
/// compare equal when their expression and case sensitivity are equal, so
/// they can serve as map keys.
#[derive(Debug, Clone)]
pub struct Regex {
    expression: String,
    case_sensitive: bool,
    // anchored variant for whole-string matching
    matcher: RawRegex,
    // unanchored variant for scanning
    finder: RawRegex,
}

impl Regex {
    /// Compiles a case-sensitive regular expression
    pub fn new(expression: &str) -> Result<Self> {
        Self::with_case_sensitivity(expression, DEFAULT_CASE_SENSITIVITY)
    }

    /// Compiles a regular expression with explicit case sensitivity
    pub fn with_case_sensitivity(expression: &str, case_sensitive: bool) -> Result<Self> {
        let matcher = RegexBuilder::new(&format!("^(?:{expression})$"))
            .case_insensitive(!case_sensitive)
            .build()?;
        let finder = RegexBuilder::new(expression)
            .case_insensitive(!case_sensitive)
            .build()?;
        trace!(
            expression,
            case_sensitive,
            "compiled regular expression"
        );
        Ok(Self {
            expression: expression.to_string(),
            case_sensitive,
            matcher,
            finder,
        })
    }

    /// The match-all expression (`.*`)
    pub fn match_all() -> Self {
        Self::new(MATCH_ALL).expect("the match-all pattern is a valid expression")
    }

    /// The source expression
    pub fn as_str(&self) -> &str {
        &self.expression
    }

    /// Whether the expression is applied case-sensitively
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Tests whether the whole input string matches the expression
    pub fn matches(&self, input: &str) -> bool {
        self.matcher.is_match(input)
    }

    /// Returns the capture groups of every occurrence of the expression in
    /// the input; each entry holds the groups of one occurrence, `None` for
    /// groups that did not participate in the match
    pub fn all_matches(&self, input: &str) -> Vec<Vec<Option<String>>> {
        self.finder
            .captures_iter(input)
            .map(|captures| {
                captures
                    .iter()
                    .skip(1)
                    .map(|group| group.map(|m| m.as_str().to_string()))
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

impl PartialEq for Regex {
    fn eq(&self, other: &Self) -> bool {
        self.expression == other.expression && self.case_sensitive == other.case_sensitive
    }
}

impl Eq for Regex {}

impl Hash for Regex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.expression.hash(state);
        self.case_sensitive.hash(state);
    }
}
