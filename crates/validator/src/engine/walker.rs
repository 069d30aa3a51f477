use crate::engine::Settings;
use crate::engine::compare::Comparison;
use crate::engine::emptiness::is_empty;
use crate::foundation::{ErrorKind, FieldValue, Record, ValidationError, ValidationResult};
use crate::rules::{self, Rule};

/// Depth-first walk over a record's descriptor table.
///
/// Present nested records are always descended into, whatever rules their
/// field carries. Everything else is a leaf: its rule string is parsed and
/// evaluated in order, and the first failure stops the walk.
pub(crate) struct Walker<'s> {
    settings: &'s Settings,
}

impl<'s> Walker<'s> {
    pub(crate) fn new(settings: &'s Settings) -> Self {
        Self { settings }
    }

    /// Validates `record`, which sits `depth` levels below the root.
    pub(crate) fn walk(&self, record: &dyn Record, depth: usize) -> ValidationResult {
        for (index, descriptor) in record.fields().iter().enumerate() {
            let Some(value) = record.field_value(index) else {
                tracing::warn!(
                    record = record.type_name(),
                    field = descriptor.name,
                    index,
                    "descriptor has no accessor, skipping"
                );
                continue;
            };

            if let FieldValue::Composite(nested) = value {
                if depth >= self.settings.max_depth {
                    return Err(ValidationError::new(ErrorKind::DepthExceeded {
                        field: descriptor.name,
                        max_depth: self.settings.max_depth,
                    }));
                }
                tracing::trace!(
                    record = record.type_name(),
                    field = descriptor.name,
                    nested = nested.type_name(),
                    depth = depth + 1,
                    "descending into nested record"
                );
                self.walk(nested, depth + 1)
                    .map_err(|error| error.with_parent(descriptor.name))?;
                continue;
            }

            if let Some(rules) = descriptor.rule_string() {
                self.check_leaf(descriptor.name, rules, value)?;
            }
        }
        Ok(())
    }

    fn check_leaf(
        &self,
        field: &'static str,
        rules: &'static str,
        value: FieldValue<'_>,
    ) -> ValidationResult {
        let rules = rules::parse(rules);
        let empty = is_empty(&value);

        if empty && rules.omit_empty {
            tracing::trace!(field, "empty value under omitempty, skipping rules");
            return Ok(());
        }

        for rule in rules.iter() {
            match *rule {
                Rule::Required if empty => {
                    return Err(ErrorKind::Required { field }.into());
                }
                Rule::Required => {}
                Rule::Compare {
                    operator,
                    parameter,
                } => Comparison {
                    field,
                    operator,
                    parameter,
                }
                .evaluate(value, self.settings)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LengthMode, ResolvedZone};
    use crate::foundation::{Bindable, FieldDescriptor};
    use chrono::FixedOffset;
    use pretty_assertions::assert_eq;

    fn settings(max_depth: usize) -> Settings {
        Settings {
            zone: ResolvedZone::Fixed(FixedOffset::east_opt(0).unwrap()),
            max_depth,
            length_mode: LengthMode::Bytes,
        }
    }

    fn walk(record: &dyn Record) -> ValidationResult {
        Walker::new(&settings(8)).walk(record, 0)
    }

    // Hand-registered records; the derive is covered by integration tests.

    struct Custom {
        address: String,
        hobby: String,
    }

    impl Record for Custom {
        fn type_name(&self) -> &'static str {
            "Custom"
        }

        fn fields(&self) -> &'static [FieldDescriptor] {
            const FIELDS: &[FieldDescriptor] = &[
                FieldDescriptor::new("address").with_rules("max=10,omitempty"),
                FieldDescriptor::new("hobby").with_rules("min=1,max=20"),
            ];
            FIELDS
        }

        fn field_value(&self, index: usize) -> Option<FieldValue<'_>> {
            match index {
                0 => Some(self.address.field_value()),
                1 => Some(self.hobby.field_value()),
                _ => None,
            }
        }
    }

    struct Req {
        id: i64,
        score: i64,
        custom: Custom,
        custom_p: Option<Box<Custom>>,
    }

    impl Record for Req {
        fn type_name(&self) -> &'static str {
            "Req"
        }

        fn fields(&self) -> &'static [FieldDescriptor] {
            const FIELDS: &[FieldDescriptor] = &[
                FieldDescriptor::new("id").with_rules("required,min=1"),
                FieldDescriptor::new("score").with_rules("required,gte=60"),
                FieldDescriptor::new("custom").with_rules("required"),
                FieldDescriptor::new("custom_p").with_rules("required"),
            ];
            FIELDS
        }

        fn field_value(&self, index: usize) -> Option<FieldValue<'_>> {
            match index {
                0 => Some(self.id.field_value()),
                1 => Some(self.score.field_value()),
                2 => Some(FieldValue::Composite(&self.custom)),
                3 => Some(match &self.custom_p {
                    Some(custom) => FieldValue::Composite(&**custom),
                    None => FieldValue::Null(crate::foundation::ValueKind::Composite),
                }),
                _ => None,
            }
        }
    }

    fn custom(hobby: &str) -> Custom {
        Custom {
            address: String::new(),
            hobby: hobby.to_string(),
        }
    }

    fn req() -> Req {
        Req {
            id: 1,
            score: 99,
            custom: custom("coding"),
            custom_p: Some(Box::new(custom("coding"))),
        }
    }

    #[test]
    fn valid_request_passes() {
        assert_eq!(walk(&req()), Ok(()));
    }

    #[test]
    fn first_failure_in_declaration_order_wins() {
        let request = Req {
            id: 0,
            score: 0,
            ..req()
        };
        let error = walk(&request).unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::Required { field: "id" });
    }

    #[test]
    fn nested_failure_is_prefixed() {
        let request = Req {
            custom: custom(""),
            ..req()
        };
        let error = walk(&request).unwrap_err();
        assert_eq!(error.to_string(), "custom.hobby needs at least 1 items/characters");
    }

    #[test]
    fn absent_nested_record_evaluates_own_rules() {
        let request = Req {
            custom_p: None,
            ..req()
        };
        assert_eq!(walk(&request).unwrap_err().to_string(), "custom_p is required");
    }

    #[test]
    fn present_optional_record_is_descended_into() {
        let request = Req {
            custom_p: Some(Box::new(custom(&"x".repeat(21)))),
            ..req()
        };
        assert_eq!(
            walk(&request).unwrap_err().to_string(),
            "custom_p.hobby can have at most 20 items/characters"
        );
    }

    struct Chain {
        next: Option<Box<Chain>>,
    }

    impl Record for Chain {
        fn type_name(&self) -> &'static str {
            "Chain"
        }

        fn fields(&self) -> &'static [FieldDescriptor] {
            const FIELDS: &[FieldDescriptor] = &[FieldDescriptor::new("next")];
            FIELDS
        }

        fn field_value(&self, index: usize) -> Option<FieldValue<'_>> {
            match (index, &self.next) {
                (0, Some(next)) => Some(FieldValue::Composite(&**next)),
                (0, None) => Some(FieldValue::Null(crate::foundation::ValueKind::Composite)),
                _ => None,
            }
        }
    }

    fn chain(len: usize) -> Chain {
        (0..len).fold(Chain { next: None }, |tail, _| Chain {
            next: Some(Box::new(tail)),
        })
    }

    #[test]
    fn depth_limit_is_enforced() {
        let walker_settings = settings(3);
        let walker = Walker::new(&walker_settings);
        assert_eq!(walker.walk(&chain(3), 0), Ok(()));

        let error = walker.walk(&chain(4), 0).unwrap_err();
        assert_eq!(error.code(), "depth_exceeded");
        assert_eq!(error.field_path(), "next.next.next.next");
    }

    struct Broken;

    impl Record for Broken {
        fn type_name(&self) -> &'static str {
            "Broken"
        }

        fn fields(&self) -> &'static [FieldDescriptor] {
            const FIELDS: &[FieldDescriptor] = &[FieldDescriptor::new("ghost").with_rules("required")];
            FIELDS
        }

        fn field_value(&self, _index: usize) -> Option<FieldValue<'_>> {
            None
        }
    }

    #[test]
    fn missing_accessor_is_skipped() {
        assert_eq!(walk(&Broken), Ok(()));
    }

    #[test]
    fn bool_required() {
        struct Flags {
            accepted: bool,
        }

        impl Record for Flags {
            fn type_name(&self) -> &'static str {
                "Flags"
            }

            fn fields(&self) -> &'static [FieldDescriptor] {
                const FIELDS: &[FieldDescriptor] =
                    &[FieldDescriptor::new("accepted").with_rules("required")];
                FIELDS
            }

            fn field_value(&self, index: usize) -> Option<FieldValue<'_>> {
                (index == 0).then(|| self.accepted.field_value())
            }
        }

        assert!(walk(&Flags { accepted: true }).is_ok());
        assert_eq!(
            walk(&Flags { accepted: false }).unwrap_err().to_string(),
            "accepted is required"
        );
    }
}
