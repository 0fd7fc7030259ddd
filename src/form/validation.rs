use anyhow::{Context, Result};
use jsonschema::{Validator, validator_for};

use crate::domain::{FieldAttr, FormDocument, document_schema};

use super::error::{FieldIssue, ValidationErrors};

/// Compiled document schema, applied at submit time only.
///
/// Keystroke edits never pass through here; a document that fails validation
/// stays editable and persisted as-is.
pub struct FormValidator {
    validator: Validator,
}

impl FormValidator {
    pub fn new() -> Result<Self> {
        let schema = document_schema().context("failed to build document schema")?;
        let validator = validator_for(&schema).context("failed to compile document schema")?;
        Ok(Self { validator })
    }

    /// Check a document against the schema without touching any UI state.
    ///
    /// An empty document passes: the per-entry rules hold vacuously over an
    /// empty array.
    pub fn validate(&self, doc: &FormDocument) -> Result<(), ValidationErrors> {
        let value = match serde_json::to_value(doc) {
            Ok(value) => value,
            Err(err) => {
                return Err(ValidationErrors {
                    issues: Vec::new(),
                    global: vec![format!("failed to serialize document: {err}")],
                });
            }
        };
        if self.validator.is_valid(&value) {
            return Ok(());
        }

        let mut errors = ValidationErrors::default();
        for error in self.validator.iter_errors(&value) {
            let pointer = error.instance_path.to_string();
            match issue_from_pointer(&pointer) {
                Some(issue) if !errors.issues.contains(&issue) => errors.issues.push(issue),
                Some(_) => {}
                None => {
                    let prefix = if pointer.is_empty() {
                        "<root>"
                    } else {
                        pointer.as_str()
                    };
                    errors.global.push(format!("{prefix}: {error}"));
                }
            }
        }
        Err(errors)
    }
}

/// Map an instance path like `/fields/2/name` back onto a row attribute.
fn issue_from_pointer(pointer: &str) -> Option<FieldIssue> {
    let mut segments = pointer.strip_prefix('/')?.split('/');
    if segments.next() != Some("fields") {
        return None;
    }
    let index = segments.next()?.parse::<usize>().ok()?;
    let attr = FieldAttr::from_key(segments.next()?)?;
    if segments.next().is_some() {
        return None;
    }
    Some(FieldIssue { index, attr })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldEntry;

    fn entry(name: &str, kind: &str, value: &str) -> FieldEntry {
        FieldEntry {
            name: name.to_string(),
            kind: kind.to_string(),
            value: value.to_string(),
        }
    }

    fn validator() -> FormValidator {
        FormValidator::new().expect("validator")
    }

    #[test]
    fn accepts_a_fully_filled_document() {
        let doc = FormDocument {
            fields: vec![entry("Age", "number", "30"), entry("Mail", "email", "a@b")],
        };
        assert!(validator().validate(&doc).is_ok());
    }

    #[test]
    fn accepts_the_empty_document() {
        assert!(validator().validate(&FormDocument::empty()).is_ok());
    }

    #[test]
    fn default_document_fails_on_name_and_value() {
        let errors = validator()
            .validate(&FormDocument::default())
            .expect_err("blank row must fail");
        assert_eq!(errors.issue_count(), 2);
        assert!(errors.has_issue(0, FieldAttr::Name));
        assert!(errors.has_issue(0, FieldAttr::Value));
        assert!(!errors.has_issue(0, FieldAttr::Type));
        assert!(errors.global.is_empty());
    }

    #[test]
    fn rejects_types_outside_the_enum() {
        let doc = FormDocument {
            fields: vec![entry("When", "date", "tomorrow")],
        };
        let errors = validator().validate(&doc).expect_err("bad type must fail");
        assert!(errors.has_issue(0, FieldAttr::Type));
        assert_eq!(errors.issue_count(), 1);
    }

    #[test]
    fn reports_issues_per_row() {
        let doc = FormDocument {
            fields: vec![entry("ok", "text", "filled"), entry("", "email", "x")],
        };
        let errors = validator().validate(&doc).expect_err("row 1 must fail");
        assert!(errors.issues_for(0).next().is_none());
        assert!(errors.has_issue(1, FieldAttr::Name));
        assert_eq!(errors.issue_count(), 1);
    }

    #[test]
    fn pointer_mapping_ignores_unrelated_paths() {
        assert_eq!(
            issue_from_pointer("/fields/0/name"),
            Some(FieldIssue {
                index: 0,
                attr: FieldAttr::Name
            })
        );
        assert_eq!(issue_from_pointer("/fields/0"), None);
        assert_eq!(issue_from_pointer("/fields/x/name"), None);
        assert_eq!(issue_from_pointer("/other/0/name"), None);
        assert_eq!(issue_from_pointer("/fields/0/name/extra"), None);
        assert_eq!(issue_from_pointer(""), None);
    }
}
