use schemars::schema_for;
use serde_json::Value;

use super::FormDocument;

/// JSON Schema (draft-07) describing a serialized [`FormDocument`].
///
/// Derived from the Rust types so the wire format and the validation rules
/// cannot drift apart: `name` and `value` must be non-empty strings and
/// `type` must be one of the enum values.
pub fn document_schema() -> Result<Value, serde_json::Error> {
    serde_json::to_value(schema_for!(FormDocument))
}
