use crate::rules::{Operator, Rule, RuleSet};

const REQUIRED: &str = "required";
const OMIT_EMPTY: &str = "omitempty";

/// Parses a rule string.
///
/// Never fails: tokens that are not `required`, `omitempty` or a well-formed
/// `op=param` pair are dropped. Only whole tokens are trimmed; whitespace
/// around the `=` stays part of the operator or the parameter.
///
/// # Examples
///
/// ```rust
/// use binding_validator::rules::{parse, Operator, Rule};
///
/// let set = parse("required, min=1 ,json:\"id\",omitempty");
/// assert!(set.omit_empty);
/// assert_eq!(
///     set.rules.as_slice(),
///     &[
///         Rule::Required,
///         Rule::Compare { operator: Operator::Min, parameter: "1" },
///     ]
/// );
/// ```
#[must_use]
pub fn parse(rules: &str) -> RuleSet<'_> {
    let mut set = RuleSet::default();

    for token in rules.split(',').map(str::trim) {
        match token {
            "" => {}
            REQUIRED => set.rules.push(Rule::Required),
            OMIT_EMPTY => set.omit_empty = true,
            _ => {
                let Some((operator, parameter)) = token.split_once('=') else {
                    continue;
                };
                if operator.is_empty() {
                    continue;
                }
                set.rules.push(Rule::Compare {
                    operator: Operator::from_token(operator),
                    parameter,
                });
            }
        }
    }

    set
}
