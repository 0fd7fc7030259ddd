mod schema;

pub use schema::document_schema;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Store key the serialized document is saved under.
pub const STORAGE_KEY: &str = "formData";

/// The three input types a field row can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Email,
}

impl FieldType {
    pub const ALL: [FieldType; 3] = [FieldType::Text, FieldType::Number, FieldType::Email];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Email => "email",
        }
    }

    /// Parse a stored type string. `None` for anything outside the enum.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == raw)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One attribute of a field entry. Doubles as the column focus in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAttr {
    Name,
    Type,
    Value,
}

impl FieldAttr {
    pub const ALL: [FieldAttr; 3] = [FieldAttr::Name, FieldAttr::Type, FieldAttr::Value];

    pub fn key(&self) -> &'static str {
        match self {
            FieldAttr::Name => "name",
            FieldAttr::Type => "type",
            FieldAttr::Value => "value",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|attr| attr.key() == key)
    }
}

/// One logical form row.
///
/// The `type` attribute is kept as a free string: the UI only ever writes enum
/// values into it, but programmatic edits may store anything and validation is
/// what rejects strays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldEntry {
    #[schemars(length(min = 1))]
    pub name: String,
    #[serde(rename = "type")]
    #[schemars(with = "FieldType")]
    pub kind: String,
    #[schemars(length(min = 1))]
    pub value: String,
}

impl FieldEntry {
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            kind: FieldType::Text.as_str().to_string(),
            value: String::new(),
        }
    }

    pub fn attr(&self, attr: FieldAttr) -> &str {
        match attr {
            FieldAttr::Name => &self.name,
            FieldAttr::Type => &self.kind,
            FieldAttr::Value => &self.value,
        }
    }

    pub fn attr_mut(&mut self, attr: FieldAttr) -> &mut String {
        match attr {
            FieldAttr::Name => &mut self.name,
            FieldAttr::Type => &mut self.kind,
            FieldAttr::Value => &mut self.value,
        }
    }
}

/// The ordered collection of all field rows, as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FormDocument {
    pub fields: Vec<FieldEntry>,
}

impl FormDocument {
    pub fn empty() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Default for FormDocument {
    /// A fresh document starts with a single blank row.
    fn default() -> Self {
        Self {
            fields: vec![FieldEntry::blank()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_document_has_one_blank_row() {
        let doc = FormDocument::default();
        assert_eq!(doc.fields.len(), 1);
        assert_eq!(doc.fields[0], FieldEntry::blank());
        assert_eq!(doc.fields[0].kind, "text");
    }

    #[test]
    fn serializes_with_stable_attribute_order() {
        let doc = FormDocument {
            fields: vec![FieldEntry {
                name: "Age".to_string(),
                kind: "number".to_string(),
                value: "30".to_string(),
            }],
        };
        assert_eq!(
            doc.to_json_string().unwrap(),
            r#"{"fields":[{"name":"Age","type":"number","value":"30"}]}"#
        );
    }

    #[test]
    fn round_trips_through_json() {
        let doc = FormDocument {
            fields: vec![
                FieldEntry {
                    name: "Email".to_string(),
                    kind: "email".to_string(),
                    value: "a@b.c".to_string(),
                },
                FieldEntry::blank(),
            ],
        };
        let raw = doc.to_json_string().unwrap();
        assert_eq!(FormDocument::parse(&raw).unwrap(), doc);
    }

    #[test]
    fn rejects_malformed_payloads() {
        assert!(FormDocument::parse("not json").is_err());
        assert!(FormDocument::parse(r#"{"fields": 3}"#).is_err());
    }

    #[test]
    fn field_type_parses_enum_values_only() {
        assert_eq!(FieldType::parse("number"), Some(FieldType::Number));
        assert_eq!(FieldType::parse("Number"), None);
        assert_eq!(FieldType::parse("date"), None);
    }
}
