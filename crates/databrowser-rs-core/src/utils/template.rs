//! Template parameter extraction.
//!
//! Objects that are handed to templates as parameter dictionaries implement
//! [`TemplateParam`]. The template engine receives a plain JSON map, so the
//! key `"values"` is reserved (it shadows the dictionary method of the same
//! name on the template side).

use std::collections::HashMap;

use crate::error::{DatabrowserError, DatabrowserResult};

/// A type that can expose a chosen subset of its fields to a template.
///
/// Implementors supply [`TemplateParam::value`]; [`TemplateParam::as_dict`]
/// assembles the parameter dictionary, mapping absent values to the empty
/// string so templates never see a null.
pub trait TemplateParam {
    /// Returns the value of the named field, or `None` if unset.
    fn value(&self, field: &str) -> Option<serde_json::Value>;

    /// Collects the named fields into a template parameter dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`DatabrowserError::ReservedFieldName`] if one of the
    /// requested fields is the reserved key `"values"`.
    fn as_dict(&self, fields: &[&str]) -> DatabrowserResult<HashMap<String, serde_json::Value>> {
        let mut items = HashMap::with_capacity(fields.len());
        for &field in fields {
            if field == "values" {
                return Err(DatabrowserError::ReservedFieldName {
                    name: field.to_string(),
                });
            }
            let value = self
                .value(field)
                .unwrap_or_else(|| serde_json::Value::String(String::new()));
            items.insert(field.to_string(), value);
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pagination {
        page: i64,
        per_page: i64,
        note: Option<String>,
    }

    impl TemplateParam for Pagination {
        fn value(&self, field: &str) -> Option<serde_json::Value> {
            match field {
                "page" => Some(self.page.into()),
                "per_page" => Some(self.per_page.into()),
                "note" => self.note.clone().map(serde_json::Value::String),
                _ => None,
            }
        }
    }

    #[test]
    fn test_as_dict_collects_fields() {
        let p = Pagination {
            page: 2,
            per_page: 20,
            note: Some("partial".into()),
        };
        let dict = p.as_dict(&["page", "per_page", "note"]).unwrap();
        assert_eq!(dict["page"], serde_json::json!(2));
        assert_eq!(dict["per_page"], serde_json::json!(20));
        assert_eq!(dict["note"], serde_json::json!("partial"));
    }

    #[test]
    fn test_as_dict_maps_absent_to_empty_string() {
        let p = Pagination {
            page: 1,
            per_page: 20,
            note: None,
        };
        let dict = p.as_dict(&["note"]).unwrap();
        assert_eq!(dict["note"], serde_json::json!(""));
    }

    #[test]
    fn test_as_dict_rejects_reserved_key() {
        let p = Pagination {
            page: 1,
            per_page: 20,
            note: None,
        };
        let err = p.as_dict(&["page", "values"]).unwrap_err();
        assert!(matches!(
            err,
            DatabrowserError::ReservedFieldName { ref name } if name == "values"
        ));
    }
}
