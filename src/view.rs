//! View rendering seam
//!
//! The handlers speak a narrow interface: hand the engine a view name and a
//! field binding, get HTML back. Template syntax never leaks into the
//! handlers, and the engine holds no per-request state, so a single instance
//! is shared read-only across requests.

use crate::error::Result;
use tera::{Context, Tera};

/// The two views this application renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewName {
    Form,
    Results,
}

impl ViewName {
    /// Template name. The `.html` suffix keeps tera's auto-escaping on.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewName::Form => "form.html",
            ViewName::Results => "results.html",
        }
    }
}

/// Template engine with both views registered at startup.
pub struct ViewEngine {
    tera: Tera,
}

impl ViewEngine {
    /// Compile the embedded templates. Fails only on a template syntax
    /// error, which is a startup bug rather than a runtime condition.
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (ViewName::Form.as_str(), include_str!("../templates/form.html")),
            (
                ViewName::Results.as_str(),
                include_str!("../templates/results.html"),
            ),
        ])?;
        Ok(Self { tera })
    }

    pub fn render(&self, view: ViewName, context: &Context) -> Result<String> {
        Ok(self.tera.render(view.as_str(), context)?)
    }
}
