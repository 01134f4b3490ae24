//! HTTP surface: one route, two verbs
//!
//! `GET /` renders the empty form. `POST /` binds the submission, validates
//! it, and either re-renders the form with inline errors or renders the
//! results view. Every path from a POST terminates in a renderable view;
//! user input never becomes a fault.
//!
//! On an invalid submission the form is re-rendered synchronously with the
//! submitted values preserved, rather than redirecting with a flash message.

use crate::domain::{Person, PersonForm};
use crate::error::Error;
use crate::validation::{validate, ValidationReport};
use crate::view::{ViewEngine, ViewName};
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Form, Router};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct AppState {
    views: Arc<ViewEngine>,
}

pub fn router(views: Arc<ViewEngine>) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { views })
}

/// Raw POST body fields, before any coercion.
#[derive(Debug, Deserialize)]
pub struct PersonSubmission {
    pub name: Option<String>,
    pub age: Option<String>,
}

impl PersonSubmission {
    /// Bind the raw fields onto the form model.
    ///
    /// A non-numeric or empty `age` is folded into "absent" so it fails the
    /// presence constraint like an omitted field, instead of becoming a
    /// type error.
    fn into_form(self) -> PersonForm {
        PersonForm {
            name: self.name,
            age: self.age.and_then(|raw| raw.trim().parse::<i64>().ok()),
        }
    }
}

#[instrument(skip_all)]
async fn show_form(State(state): State<AppState>) -> Result<Html<String>, Error> {
    let context = form_context(&PersonForm::default(), &ValidationReport::default());
    state
        .views
        .render(ViewName::Form, &context)
        .map(Html)
}

#[instrument(skip_all)]
async fn submit(
    State(state): State<AppState>,
    Form(submission): Form<PersonSubmission>,
) -> Result<Html<String>, Error> {
    let form = submission.into_form();
    let report = validate(&form);
    debug!(form = %form, valid = report.is_valid(), "validated submission");

    if report.is_valid() {
        if let Some(person) = Person::from_validated(&form) {
            let mut context = tera::Context::new();
            context.insert("name", person.name.as_ref());
            context.insert("age", &person.age.into_inner());
            return state.views.render(ViewName::Results, &context).map(Html);
        }
    }

    let context = form_context(&form, &report);
    state.views.render(ViewName::Form, &context).map(Html)
}

/// Field binding for the form view: submitted values plus per-field errors.
fn form_context(form: &PersonForm, report: &ValidationReport) -> tera::Context {
    let mut context = tera::Context::new();
    context.insert("name", form.name.as_deref().unwrap_or(""));
    context.insert(
        "age",
        &form.age.map(|age| age.to_string()).unwrap_or_default(),
    );
    context.insert("name_errors", report.errors_for("name"));
    context.insert("age_errors", report.errors_for("age"));
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: Option<&str>, age: Option<&str>) -> PersonSubmission {
        PersonSubmission {
            name: name.map(str::to_string),
            age: age.map(str::to_string),
        }
    }

    #[test]
    fn numeric_age_is_coerced() {
        let form = submission(Some("Alice"), Some("30")).into_form();
        assert_eq!(form.age, Some(30));
    }

    #[test]
    fn non_numeric_age_binds_as_absent() {
        assert_eq!(submission(None, Some("abc")).into_form().age, None);
        assert_eq!(submission(None, Some("")).into_form().age, None);
        assert_eq!(submission(None, Some("12.5")).into_form().age, None);
    }

    #[test]
    fn surrounding_whitespace_does_not_break_coercion() {
        assert_eq!(submission(None, Some(" 21 ")).into_form().age, Some(21));
    }

    #[test]
    fn name_binds_verbatim() {
        let form = submission(Some(""), None).into_form();
        assert_eq!(form.name.as_deref(), Some(""));
    }
}
