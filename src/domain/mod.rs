//! Domain model: the person form and its validated counterpart

pub mod person;

pub use person::{Person, PersonAge, PersonForm, PersonName};
