//! Property-based tests for binding-validator.

use binding_validator::prelude::*;
use binding_validator::{Rule, rules};
use proptest::prelude::*;

#[derive(Debug, Clone, Record)]
pub struct Untagged {
    pub name: String,
    pub count: i64,
    pub tags: Vec<String>,
    pub inner: Option<Box<UntaggedInner>>,
}

#[derive(Debug, Clone, Record)]
pub struct UntaggedInner {
    pub ratio: f64,
    pub flag: bool,
}

#[derive(Debug, Clone, Record)]
pub struct Bounded {
    #[binding("min=1")]
    pub id: i64,
    #[binding("required")]
    pub title: String,
    #[binding("required,omitempty,min=3")]
    pub alias: String,
}

fn untagged() -> impl Strategy<Value = Untagged> {
    (
        ".{0,12}",
        any::<i64>(),
        prop::collection::vec(".{0,4}", 0..4),
        prop::option::of((any::<f64>(), any::<bool>())),
    )
        .prop_map(|(name, count, tags, inner)| Untagged {
            name,
            count,
            tags,
            inner: inner.map(|(ratio, flag)| Box::new(UntaggedInner { ratio, flag })),
        })
}

// ============================================================================
// NO RULES, NO FAILURES
// ============================================================================

proptest! {
    #[test]
    fn records_without_rules_always_pass(record in untagged()) {
        prop_assert!(record.validate().is_ok());
    }
}

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn validation_is_idempotent(id in any::<i64>(), title in ".{0,6}", alias in ".{0,6}") {
        let record = Bounded { id, title, alias };
        prop_assert_eq!(record.validate(), record.validate());
    }

    #[test]
    fn parse_is_idempotent(rules in "[a-z=0-9, ]{0,24}") {
        prop_assert_eq!(rules::parse(&rules), rules::parse(&rules));
    }
}

// ============================================================================
// RULE SEMANTICS
// ============================================================================

proptest! {
    #[test]
    fn integer_min_matches_comparison(id in any::<i64>()) {
        let record = Bounded { id, title: "t".into(), alias: String::new() };
        prop_assert_eq!(record.validate().is_ok(), id >= 1);
    }

    #[test]
    fn required_fails_iff_empty(title in ".{0,4}") {
        let record = Bounded { id: 1, title: title.clone(), alias: String::new() };
        let result = record.validate();
        prop_assert_eq!(result.is_err(), title.is_empty());
        if let Err(error) = result {
            prop_assert_eq!(error.code(), "required");
        }
    }

    #[test]
    fn omitempty_only_checks_present_values(alias in "[a-z]{0,6}") {
        let record = Bounded { id: 1, title: "t".into(), alias: alias.clone() };
        prop_assert_eq!(record.validate().is_ok(), alias.is_empty() || alias.len() >= 3);
    }

    #[test]
    fn parse_never_yields_empty_operators(rules in ".{0,32}") {
        for rule in rules::parse(&rules).iter() {
            if let Rule::Compare { operator, .. } = rule {
                prop_assert!(!operator.as_str().is_empty());
            }
        }
    }
}
