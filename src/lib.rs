//! Formcheck - validated form submission, end to end
//!
//! A small web application demonstrating server-side form validation: a
//! single HTML form collects a person's name and age, declarative
//! constraints are evaluated against the bound submission, and the response
//! re-renders the form with inline errors or renders a results view.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod validation;
pub mod view;
pub mod web;

pub use application::Application;
pub use error::{Error, Result};
