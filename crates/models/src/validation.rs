//! Declarative payload validation.
//!
//! Each record payload carries an ordered list of [`Rule`]s. Rules are
//! evaluated in order against the fully populated payload and the first
//! failing rule is reported as a [`ValidationError`].

use serde::Serialize;
use thiserror::Error;

/// A single violated rule: which field, and the constraint it broke.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Predicate plus the message reported when it does not hold.
pub struct Rule<T> {
    pub field: &'static str,
    pub message: &'static str,
    pub check: fn(&T) -> bool,
}

impl<T> Rule<T> {
    pub fn violation(&self) -> ValidationError {
        ValidationError { field: self.field, message: self.message }
    }
}

pub trait Validate: Sized + 'static {
    const RULES: &'static [Rule<Self>];

    /// Check every rule in declaration order; stop at the first failure.
    fn validate(&self) -> Result<(), ValidationError> {
        match Self::RULES.iter().find(|rule| !(rule.check)(self)) {
            Some(rule) => Err(rule.violation()),
            None => Ok(()),
        }
    }
}

/// Inclusive length bounds counted in characters, not bytes.
pub fn char_len_within(s: &str, min: usize, max: usize) -> bool {
    let n = s.chars().count();
    n >= min && n <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        a: i32,
        b: i32,
    }

    impl Validate for Pair {
        const RULES: &'static [Rule<Self>] = &[
            Rule { field: "a", message: "a must be positive", check: |p| p.a > 0 },
            Rule { field: "b", message: "b must exceed a", check: |p| p.b > p.a },
        ];
    }

    #[test]
    fn reports_first_failing_rule() {
        let err = Pair { a: -1, b: -5 }.validate().unwrap_err();
        assert_eq!(err.field, "a");
        let err = Pair { a: 3, b: 1 }.validate().unwrap_err();
        assert_eq!(err.field, "b");
        assert_eq!(err.to_string(), "b: b must exceed a");
        assert!(Pair { a: 1, b: 2 }.validate().is_ok());
    }

    #[test]
    fn char_len_counts_chars() {
        assert!(char_len_within("café", 4, 4));
        assert!(!char_len_within("ab", 3, 100));
    }
}
