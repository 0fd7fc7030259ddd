#![deny(rust_2018_idioms)]

//! A terminal editor for dynamic name/type/value forms.
//!
//! Rows can be added and removed at runtime, every change is written through
//! a pluggable key-value store, and submission validates the whole document
//! against a schema derived from the data model. The headless pieces
//! ([`FormSession`], [`FormValidator`], [`KeyValueStore`]) work without a
//! terminal; [`FormEditor`] wires them to a ratatui front end.

mod app;
mod domain;
mod form;
mod io;
mod store;
mod ui;

pub use app::{FormEditor, Messages, UiOptions};
pub use domain::{FieldAttr, FieldEntry, FieldType, FormDocument, STORAGE_KEY, document_schema};
pub use form::{FieldIssue, FormSession, FormState, FormValidator, ValidationErrors};
pub use io::{DocumentFormat, OutputDestination, OutputOptions, emit};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

pub mod prelude {
    pub use super::{FileStore, FormDocument, FormEditor, MemoryStore, UiOptions};
}
