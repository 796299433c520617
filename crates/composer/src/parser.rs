//! JSON parsing for configuration, requests and backend listings

use crate::config::ComposerConfig;
use crate::schema::{BillNoteRequest, CreditNoteRequest};
use crate::{ComposeError, Result};

/// Parse composer configuration from a JSON string
///
/// Missing fields take their defaults; the result is validated.
pub fn parse_config(json: &str) -> Result<ComposerConfig> {
    let config: ComposerConfig =
        serde_json::from_str(json).map_err(|e| ComposeError::ConfigError(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Parse a bill note request from a JSON string
pub fn parse_bill_note_request(json: &str) -> Result<BillNoteRequest> {
    serde_json::from_str(json).map_err(|e| ComposeError::ParseError(e.to_string()))
}

/// Parse a credit note request from a JSON string
pub fn parse_credit_note_request(json: &str) -> Result<CreditNoteRequest> {
    serde_json::from_str(json).map_err(|e| ComposeError::ParseError(e.to_string()))
}

/// Resolve a JSONPath-like expression against data
///
/// Supports simple paths like:
/// - `$.field` - Root field
/// - `$.object.field` - Nested field
/// - `$.array[0]` - Array index
/// - `$.array[0].field` - Array element field
pub fn resolve_binding<'a>(
    path: &str,
    data: &'a serde_json::Value,
) -> Option<&'a serde_json::Value> {
    let path = path.strip_prefix("$.")?;
    let mut current = data;

    for segment in path.split('.') {
        if let Some(bracket_pos) = segment.find('[') {
            let field = &segment[..bracket_pos];
            let index_str = segment[bracket_pos + 1..].strip_suffix(']')?;
            let index: usize = index_str.parse().ok()?;

            if !field.is_empty() {
                current = current.get(field)?;
            }
            current = current.get(index)?;
        } else {
            current = current.get(segment)?;
        }
    }

    Some(current)
}

/// Convert a JSON value to display text
pub fn value_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.trim().to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => String::new(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_simple_field() {
        let data = json!({ "name": "John" });
        assert_eq!(resolve_binding("$.name", &data), Some(&json!("John")));
    }

    #[test]
    fn test_resolve_nested_field() {
        let data = json!({ "customer": { "name": "Jane" } });
        assert_eq!(
            resolve_binding("$.customer.name", &data),
            Some(&json!("Jane"))
        );
    }

    #[test]
    fn test_resolve_array_object() {
        let data = json!({ "items": [{ "name": "Item 1" }, { "name": "Item 2" }] });
        assert_eq!(
            resolve_binding("$.items[1].name", &data),
            Some(&json!("Item 2"))
        );
    }

    #[test]
    fn test_resolve_rejects_malformed_paths() {
        let data = json!({ "items": [1, 2] });
        assert_eq!(resolve_binding("items", &data), None);
        assert_eq!(resolve_binding("$.items[1", &data), None);
        assert_eq!(resolve_binding("$.items[x]", &data), None);
        assert_eq!(resolve_binding("$.missing", &data), None);
    }

    #[test]
    fn test_value_to_string() {
        assert_eq!(value_to_string(&json!("  hello ")), "hello");
        assert_eq!(value_to_string(&json!(42)), "42");
        assert_eq!(value_to_string(&json!(true)), "true");
        assert_eq!(value_to_string(&json!(null)), "");
    }

    #[test]
    fn test_parse_config_defaults() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config.bill_note.items_per_page.get(), 12);
        assert_eq!(config.credit_note.items_per_page.get(), 10);
    }

    #[test]
    fn test_parse_config_rejects_zero_capacity() {
        let err = parse_config(r#"{ "billNote": { "itemsPerPage": 0 } }"#).unwrap_err();
        assert!(matches!(err, ComposeError::ConfigError(_)));
    }

    #[test]
    fn test_parse_bill_note_request() {
        let json = r#"{
            "customer_id": 15,
            "invoices": [
                { "invoice_number": "A1", "invoice_date": "2025-01-02",
                  "due_date": "2025-02-01", "amount": "100.00" }
            ]
        }"#;

        let request = parse_bill_note_request(json).unwrap();
        assert_eq!(request.invoices.len(), 1);
        assert!(request.header.is_none());
    }

    #[test]
    fn test_parse_request_with_bad_date() {
        let json = r#"{ "invoices": [
            { "invoice_number": "A1", "invoice_date": "02/01/2025",
              "due_date": "2025-02-01", "amount": 1 }
        ] }"#;
        assert!(matches!(
            parse_bill_note_request(json),
            Err(ComposeError::ParseError(_))
        ));
    }
}
