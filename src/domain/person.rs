//! The person form, its constraint set, and the validated `Person` type

use crate::validation::{Constraint, FieldValue, FormModel, Rule};
use nutype::nutype;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound for an acceptable age.
pub const MIN_AGE: i64 = 18;

/// Name length bounds, in characters.
pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 30;

/// Raw form data as bound from a submission.
///
/// Fields are optional because a submission may omit them (or submit a value
/// that fails coercion). Population performs no validation; call
/// [`crate::validation::validate`] as a separate, explicit step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonForm {
    pub name: Option<String>,
    pub age: Option<i64>,
}

fn name_value(form: &PersonForm) -> FieldValue<'_> {
    match &form.name {
        Some(name) => FieldValue::Text(name),
        None => FieldValue::Absent,
    }
}

fn age_value(form: &PersonForm) -> FieldValue<'_> {
    match form.age {
        Some(age) => FieldValue::Int(age),
        None => FieldValue::Absent,
    }
}

const PERSON_CONSTRAINTS: &[Constraint<PersonForm>] = &[
    Constraint {
        field: "name",
        rule: Rule::Required,
        message: "must not be null",
        value: name_value,
    },
    Constraint {
        field: "name",
        rule: Rule::Length {
            min: NAME_MIN_LEN,
            max: NAME_MAX_LEN,
        },
        message: "size must be between 2 and 30",
        value: name_value,
    },
    Constraint {
        field: "age",
        rule: Rule::Required,
        message: "must not be null",
        value: age_value,
    },
    Constraint {
        field: "age",
        rule: Rule::Min { bound: MIN_AGE },
        message: "must be greater than or equal to 18",
        value: age_value,
    },
];

impl FormModel for PersonForm {
    fn constraints() -> &'static [Constraint<Self>] {
        PERSON_CONSTRAINTS
    }
}

/// Diagnostic display only; nothing else depends on this format.
impl fmt::Display for PersonForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person(Name: ")?;
        match &self.name {
            Some(name) => write!(f, "{name}")?,
            None => write!(f, "null")?,
        }
        write!(f, ", Age: ")?;
        match self.age {
            Some(age) => write!(f, "{age}")?,
            None => write!(f, "null")?,
        }
        write!(f, ")")
    }
}

/// A person's name, 2 to 30 characters.
#[nutype(
    validate(len_char_min = 2, len_char_max = 30),
    derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, AsRef, Display)
)]
pub struct PersonName(String);

/// A person's age, at least 18.
#[nutype(
    validate(greater_or_equal = 18),
    derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display)
)]
pub struct PersonAge(i64);

/// A person whose fields already passed validation.
///
/// The results view renders a `Person`, never a raw [`PersonForm`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: PersonName,
    pub age: PersonAge,
}

impl Person {
    /// Build a `Person` from a form whose validation report came back valid.
    ///
    /// Returns `None` when any field is missing or out of range; the newtype
    /// bounds mirror the declared constraints, so a form with a valid report
    /// always converts.
    pub fn from_validated(form: &PersonForm) -> Option<Self> {
        let name = PersonName::try_new(form.name.clone()?).ok()?;
        let age = PersonAge::try_new(form.age?).ok()?;
        Some(Self { name, age })
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person(Name: {}, Age: {})", self.name, self.age)
    }
}
