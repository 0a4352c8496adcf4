//! Joined Employee Row
//!
//! Shape of one row returned by the employee join. The join engine gives no
//! schema guarantee for the attached sub-arrays, so every level decodes into
//! a sum type with a catch-all variant and decoding never fails on shape.
//! The accessors below are total: unexpected shapes degrade to `""` or `0`.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::de::IgnoredAny;
use shared::EmployeeFull;

/// A scalar field of unknown type
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Float(f64),
    Other(IgnoredAny),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Other(IgnoredAny)
    }
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Coerce any numeric representation to an integer, `0` otherwise.
    ///
    /// Floats truncate toward zero.
    pub fn as_int(&self) -> i64 {
        match self {
            FieldValue::Int(v) => *v,
            FieldValue::Float(v) => *v as i64,
            _ => 0,
        }
    }
}

/// One element of a joined sub-array
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Candidate {
    Document(BTreeMap<String, FieldValue>),
    Other(IgnoredAny),
}

impl Candidate {
    /// String value of `field`, if this is a document and the field is text
    pub fn text(&self, field: &str) -> Option<&str> {
        match self {
            Candidate::Document(fields) => fields.get(field).and_then(FieldValue::as_text),
            Candidate::Other(_) => None,
        }
    }
}

/// A joined sub-array, or whatever arrived in its place
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Candidates {
    List(Vec<Candidate>),
    Other(IgnoredAny),
}

impl Default for Candidates {
    fn default() -> Self {
        Candidates::List(Vec::new())
    }
}

impl Candidates {
    pub fn first(&self) -> Option<&Candidate> {
        match self {
            Candidates::List(items) => items.first(),
            Candidates::Other(_) => None,
        }
    }

    /// `field` of the first element as a string, `""` for any other shape
    pub fn first_text(&self, field: &str) -> String {
        self.first()
            .and_then(|candidate| candidate.text(field))
            .unwrap_or_default()
            .to_string()
    }
}

/// Named sub-arrays attached by the join
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinArray {
    Department,
    Developer,
    Tester,
}

impl JoinArray {
    /// Field name the join writes the sub-array under
    pub fn field(&self) -> &'static str {
        match self {
            JoinArray::Department => "department_info",
            JoinArray::Developer => "developer_info",
            JoinArray::Tester => "tester_info",
        }
    }
}

/// Employee row annotated with its department, developer and tester matches
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JoinedEmployeeRow {
    #[serde(default)]
    pub id: FieldValue,
    #[serde(default)]
    pub name: Option<FieldValue>,
    #[serde(default, rename = "department_info")]
    pub department_candidates: Candidates,
    #[serde(default, rename = "developer_info")]
    pub developer_candidates: Candidates,
    #[serde(default, rename = "tester_info")]
    pub tester_candidates: Candidates,
}

impl JoinedEmployeeRow {
    pub fn candidates(&self, array: JoinArray) -> &Candidates {
        match array {
            JoinArray::Department => &self.department_candidates,
            JoinArray::Developer => &self.developer_candidates,
            JoinArray::Tester => &self.tester_candidates,
        }
    }

    /// `field` of the first element of the named sub-array, `""` if unavailable
    pub fn first_text(&self, array: JoinArray, field: &str) -> String {
        self.candidates(array).first_text(field)
    }

    /// Developer language, falling back to the tester language
    pub fn language(&self) -> String {
        let language = self.first_text(JoinArray::Developer, "language");
        if language.is_empty() {
            self.first_text(JoinArray::Tester, "language")
        } else {
            language
        }
    }

    pub fn into_full(self) -> EmployeeFull {
        EmployeeFull {
            id: self.id.as_int(),
            department: self.first_text(JoinArray::Department, "name"),
            language: self.language(),
            name: self
                .name
                .as_ref()
                .and_then(FieldValue::as_text)
                .unwrap_or_default()
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: serde_json::Value) -> JoinedEmployeeRow {
        serde_json::from_value(value).expect("row decoding must not fail on shape")
    }

    #[test]
    fn test_first_text_present() {
        let r = row(json!({
            "id": 1,
            "name": "Alice",
            "department_info": [{"name": "Engineering", "emp_id": 1}],
        }));
        assert_eq!(r.first_text(JoinArray::Department, "name"), "Engineering");
    }

    #[test]
    fn test_first_text_absent_array() {
        let r = row(json!({"id": 1, "name": "Alice"}));
        assert_eq!(r.first_text(JoinArray::Department, "name"), "");
    }

    #[test]
    fn test_first_text_null_array() {
        let r = row(json!({"id": 1, "department_info": null}));
        assert_eq!(r.first_text(JoinArray::Department, "name"), "");
    }

    #[test]
    fn test_first_text_empty_array() {
        let r = row(json!({"id": 1, "department_info": []}));
        assert_eq!(r.first_text(JoinArray::Department, "name"), "");
    }

    #[test]
    fn test_first_text_array_not_an_array() {
        let r = row(json!({"id": 1, "department_info": "Engineering"}));
        assert_eq!(r.first_text(JoinArray::Department, "name"), "");
    }

    #[test]
    fn test_first_text_element_not_a_document() {
        let r = row(json!({"id": 1, "developer_info": ["Go", 3]}));
        assert_eq!(r.first_text(JoinArray::Developer, "language"), "");
    }

    #[test]
    fn test_first_text_field_absent() {
        let r = row(json!({"id": 1, "developer_info": [{"emp_id": 1}]}));
        assert_eq!(r.first_text(JoinArray::Developer, "language"), "");
    }

    #[test]
    fn test_first_text_field_wrong_type() {
        let r = row(json!({"id": 1, "developer_info": [{"language": 42}]}));
        assert_eq!(r.first_text(JoinArray::Developer, "language"), "");
        let r = row(json!({"id": 1, "developer_info": [{"language": ["Go"]}]}));
        assert_eq!(r.first_text(JoinArray::Developer, "language"), "");
    }

    #[test]
    fn test_first_text_uses_first_element_only() {
        let r = row(json!({
            "id": 1,
            "developer_info": [{"emp_id": 1}, {"language": "Rust"}],
        }));
        assert_eq!(r.first_text(JoinArray::Developer, "language"), "");
    }

    #[test]
    fn test_id_coercion() {
        assert_eq!(row(json!({"id": 7})).id.as_int(), 7);
        assert_eq!(row(json!({"id": 7.9})).id.as_int(), 7);
        assert_eq!(row(json!({"id": -3})).id.as_int(), -3);
        assert_eq!(row(json!({"id": "7"})).id.as_int(), 0);
        assert_eq!(row(json!({"id": null})).id.as_int(), 0);
        assert_eq!(row(json!({"id": {"$numberLong": "7"}})).id.as_int(), 0);
        assert_eq!(row(json!({})).id.as_int(), 0);
    }

    #[test]
    fn test_language_prefers_developer() {
        let r = row(json!({
            "id": 1,
            "developer_info": [{"language": "Go"}],
            "tester_info": [{"language": "Selenium"}],
        }));
        assert_eq!(r.language(), "Go");
    }

    #[test]
    fn test_language_falls_back_to_tester() {
        let r = row(json!({
            "id": 2,
            "developer_info": [{"language": ""}],
            "tester_info": [{"language": "Selenium"}],
        }));
        assert_eq!(r.language(), "Selenium");
    }

    #[test]
    fn test_into_full_with_missing_related_rows() {
        let full = row(json!({"id": 3, "name": "Carol"})).into_full();
        assert_eq!(
            full,
            EmployeeFull {
                id: 3,
                name: "Carol".to_string(),
                department: String::new(),
                language: String::new(),
            }
        );
    }

    #[test]
    fn test_into_full_with_odd_name() {
        let full = row(json!({"id": 4, "name": 99})).into_full();
        assert_eq!(full.id, 4);
        assert_eq!(full.name, "");
    }
}
