//! Declarative field constraints and the generic form validator
//!
//! Constraints are declared once per form type as a `const` slice of
//! [`Constraint`] descriptors (field name, rule, message, accessor) and
//! evaluated per instance by [`validate`]. Constraint failures are data
//! accumulated into a [`ValidationReport`], never `Err` control flow.

use std::collections::BTreeMap;

/// A form field value as seen by the validator.
///
/// Forms hold optional fields; `Absent` covers both an omitted field and a
/// value that failed coercion (e.g. a non-numeric age), which the handler
/// folds into "absent" before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Absent,
    Text(&'a str),
    Int(i64),
}

impl FieldValue<'_> {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }
}

/// One validation rule attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The field must carry a value.
    Required,
    /// Character count must fall within `[min, max]`.
    Length { min: usize, max: usize },
    /// Numeric value must be at least `bound`.
    Min { bound: i64 },
}

impl Rule {
    /// Whether `value` satisfies this rule.
    ///
    /// Callers skip non-`Required` rules for absent values, so only
    /// `Required` inspects absence here. A rule applied to a value of the
    /// wrong shape (e.g. `Length` on an integer) is vacuously satisfied.
    fn is_satisfied_by(&self, value: &FieldValue<'_>) -> bool {
        match (self, value) {
            (Rule::Required, v) => !v.is_absent(),
            (Rule::Length { min, max }, FieldValue::Text(s)) => {
                let len = s.chars().count();
                len >= *min && len <= *max
            }
            (Rule::Min { bound }, FieldValue::Int(n)) => n >= bound,
            _ => true,
        }
    }
}

/// One constraint descriptor: a field accessor, the rule to apply, and the
/// message reported when the rule is violated.
pub struct Constraint<F> {
    pub field: &'static str,
    pub rule: Rule,
    pub message: &'static str,
    pub value: for<'a> fn(&'a F) -> FieldValue<'a>,
}

/// A form type with a statically declared constraint set.
pub trait FormModel: Sized {
    fn constraints() -> &'static [Constraint<Self>];
}

/// Per-field violation messages plus the overall verdict.
///
/// Produced by [`validate`]; read-only afterwards. A field with no entry is
/// valid; the report is valid iff no field has an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: BTreeMap<&'static str, Vec<&'static str>>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Messages recorded against `field`, in constraint declaration order.
    pub fn errors_for(&self, field: &str) -> &[&'static str] {
        self.violations.get(field).map_or(&[], Vec::as_slice)
    }

    /// The first recorded message, if any (fields in name order).
    pub fn first_error(&self) -> Option<&'static str> {
        self.violations
            .values()
            .flat_map(|messages| messages.iter())
            .next()
            .copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[&'static str])> {
        self.violations
            .iter()
            .map(|(field, messages)| (*field, messages.as_slice()))
    }

    fn record(&mut self, field: &'static str, message: &'static str) {
        self.violations.entry(field).or_default().push(message);
    }
}

/// Evaluate every declared constraint of `F` against `form`.
///
/// Pure and deterministic: the report depends only on the form's current
/// field values and the constraint declarations. Rules other than
/// [`Rule::Required`] are skipped when the field value is absent, so a
/// missing field reports its presence violation without spurious
/// length/bound errors stacked on top.
pub fn validate<F: FormModel + 'static>(form: &F) -> ValidationReport {
    let mut report = ValidationReport::default();
    for constraint in F::constraints() {
        let value = (constraint.value)(form);
        if value.is_absent() && !matches!(constraint.rule, Rule::Required) {
            continue;
        }
        if !constraint.rule.is_satisfied_by(&value) {
            report.record(constraint.field, constraint.message);
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Signup {
        username: Option<String>,
        seats: Option<i64>,
    }

    fn username_value(form: &Signup) -> FieldValue<'_> {
        match &form.username {
            Some(s) => FieldValue::Text(s),
            None => FieldValue::Absent,
        }
    }

    fn seats_value(form: &Signup) -> FieldValue<'_> {
        match form.seats {
            Some(n) => FieldValue::Int(n),
            None => FieldValue::Absent,
        }
    }

    const SIGNUP_CONSTRAINTS: &[Constraint<Signup>] = &[
        Constraint {
            field: "username",
            rule: Rule::Required,
            message: "must not be null",
            value: username_value,
        },
        Constraint {
            field: "username",
            rule: Rule::Length { min: 3, max: 8 },
            message: "size must be between 3 and 8",
            value: username_value,
        },
        Constraint {
            field: "seats",
            rule: Rule::Required,
            message: "must not be null",
            value: seats_value,
        },
        Constraint {
            field: "seats",
            rule: Rule::Min { bound: 1 },
            message: "must be greater than or equal to 1",
            value: seats_value,
        },
    ];

    impl FormModel for Signup {
        fn constraints() -> &'static [Constraint<Self>] {
            SIGNUP_CONSTRAINTS
        }
    }

    #[test]
    fn fully_valid_form_produces_empty_report() {
        let form = Signup {
            username: Some("alice".to_string()),
            seats: Some(2),
        };
        let report = validate(&form);
        assert!(report.is_valid());
        assert!(report.first_error().is_none());
        assert_eq!(report.errors_for("username"), &[] as &[&str]);
    }

    #[test]
    fn absent_field_reports_presence_only() {
        let form = Signup {
            username: None,
            seats: Some(2),
        };
        let report = validate(&form);
        assert!(!report.is_valid());
        // The length rule is skipped for an absent value.
        assert_eq!(report.errors_for("username"), &["must not be null"]);
    }

    #[test]
    fn present_but_out_of_range_reports_the_range_rule() {
        let form = Signup {
            username: Some("ab".to_string()),
            seats: Some(0),
        };
        let report = validate(&form);
        assert_eq!(
            report.errors_for("username"),
            &["size must be between 3 and 8"]
        );
        assert_eq!(
            report.errors_for("seats"),
            &["must be greater than or equal to 1"]
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let form = Signup {
            username: Some("héllo".to_string()),
            seats: Some(1),
        };
        let report = validate(&form);
        assert!(report.is_valid());
    }

    #[test]
    fn validation_is_idempotent() {
        let form = Signup {
            username: Some("x".to_string()),
            seats: None,
        };
        assert_eq!(validate(&form), validate(&form));
    }

    #[test]
    fn validate_is_usable_through_a_generic_caller() {
        fn verdict<F: FormModel + 'static>(form: &F) -> bool {
            validate(form).is_valid()
        }
        let form = Signup {
            username: Some("alice".to_string()),
            seats: Some(1),
        };
        assert!(verdict(&form));
    }

    #[test]
    fn first_error_walks_fields_in_name_order() {
        let form = Signup {
            username: None,
            seats: None,
        };
        let report = validate(&form);
        // "seats" sorts before "username".
        assert_eq!(report.first_error(), Some("must not be null"));
        assert_eq!(report.iter().count(), 2);
    }
}
