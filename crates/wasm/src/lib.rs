//! WASM bindings for rsbill
//!
//! This crate provides JavaScript-friendly API for:
//! - Thai baht text and Buddhist-era dates
//! - Credit-note line arithmetic on raw form values
//! - Pagination of table rows
//! - Resolving `"code | name"` search-box values
//! - Composing bill notes and credit notes
//! - Allocating document numbers
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { DocumentComposer, ThaiFormatter, resolveEntity } from 'rsbill-wasm';
//!
//! await init();
//!
//! ThaiFormatter.formatBahtStr("100.50"); // "หนึ่งร้อยบาทห้าสิบสตางค์"
//!
//! const customer = resolveEntity(input.value, allCustomers, "customers");
//! if (customer.rewrite) input.value = customer.canonical_label;
//!
//! const composer = DocumentComposer.fromConfig(configJson);
//! const doc = composer.composeBillNote(JSON.stringify({
//!   customer_id: customer.resolved_id,
//!   header,
//!   invoices,
//! }));
//! ```

use composer::{EntitySchema, LenientInput};
use serde::Serialize;
use std::num::NonZeroUsize;
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Serialize to plain JS objects; maps become objects rather than `Map`s
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(js_error)
}

/// Read any JS value as JSON; values that do not convert become `null`
fn to_json(value: JsValue) -> serde_json::Value {
    serde_wasm_bindgen::from_value(value).unwrap_or(serde_json::Value::Null)
}

/// Thai text formatting utilities
#[wasm_bindgen]
pub struct ThaiFormatter;

#[wasm_bindgen]
impl ThaiFormatter {
    /// Format a non-negative whole number as Thai text
    ///
    /// @param n - Number to format
    /// @returns Thai text (e.g., "สี่สิบสอง")
    #[wasm_bindgen(js_name = formatNumber)]
    pub fn format_number(n: f64) -> Result<String, JsValue> {
        if !n.is_finite() || n < 0.0 || n.fract() != 0.0 {
            return Err(js_error(format!("not a whole non-negative number: {n}")));
        }
        Ok(thai_text::format_thai_number(n as u128))
    }

    /// Format an amount as Thai Baht text
    ///
    /// @param amount - Amount in Baht
    /// @returns Thai text (e.g., "หนึ่งร้อยบาทถ้วน")
    #[wasm_bindgen(js_name = formatBaht)]
    pub fn format_baht(amount: f64) -> Result<String, JsValue> {
        thai_text::format_thai_baht_f64(amount).map_err(js_error)
    }

    /// Format a decimal string as Thai Baht text without float rounding
    ///
    /// @param amount - Amount in Baht (e.g., "100.50")
    /// @returns Thai text (e.g., "หนึ่งร้อยบาทห้าสิบสตางค์")
    #[wasm_bindgen(js_name = formatBahtStr)]
    pub fn format_baht_str(amount: &str) -> Result<String, JsValue> {
        thai_text::format_thai_baht_str(amount).map_err(js_error)
    }

    /// Format a date in long Thai format
    ///
    /// @param date - ISO date (e.g., "2025-01-22")
    /// @returns Thai date (e.g., "22 มกราคม 2568")
    #[wasm_bindgen(js_name = formatDateLong)]
    pub fn format_date_long(date: &str) -> Result<String, JsValue> {
        let date = thai_text::parse_iso_date(date).map_err(js_error)?;
        Ok(thai_text::format_thai_date_long(date))
    }

    /// Format a date as dd/mm/yyyy in the Buddhist era
    ///
    /// @param date - ISO date (e.g., "2025-01-05")
    /// @returns Thai date (e.g., "05/01/2568")
    #[wasm_bindgen(js_name = formatDate)]
    pub fn format_date(date: &str) -> Result<String, JsValue> {
        let date = thai_text::parse_iso_date(date).map_err(js_error)?;
        Ok(thai_text::format_be_date(date))
    }

    /// Format a date as dd/mm/yy in the Buddhist era
    ///
    /// @param date - ISO date (e.g., "2025-01-05")
    /// @returns Thai date (e.g., "05/01/68")
    #[wasm_bindgen(js_name = formatDateShort)]
    pub fn format_date_short(date: &str) -> Result<String, JsValue> {
        let date = thai_text::parse_iso_date(date).map_err(js_error)?;
        Ok(thai_text::format_be_date_short(date))
    }

    /// Render an amount with formatting pattern
    ///
    /// @param format - Format pattern (e.g., "#,###.##")
    /// @param amount - Amount as a decimal string
    /// @returns Formatted string
    #[wasm_bindgen(js_name = renderAmount)]
    pub fn render_amount(format: &str, amount: &str) -> Result<String, JsValue> {
        let amount = thai_text::parse_amount(amount).map_err(js_error)?;
        Ok(thai_text::render_amount(format, amount))
    }
}

/// Credit-note line value from raw form inputs
///
/// Unreadable base price or fine count as 0, an unreadable quantity as 1.
///
/// @param basePrice - Unit price as typed
/// @param fine - Per-unit deduction as typed
/// @param quantity - Quantity as typed
/// @returns Decimal string (e.g., "140")
#[wasm_bindgen(js_name = adjustedLineAmount)]
pub fn adjusted_line_amount(base_price: JsValue, fine: JsValue, quantity: JsValue) -> String {
    composer::adjusted_line_amount(to_json(base_price), to_json(fine), to_json(quantity))
        .normalize()
        .to_string()
}

/// Whether a raw form value holds a readable number
///
/// @param value - Value as typed
#[wasm_bindgen(js_name = isNumeric)]
pub fn is_numeric(value: JsValue) -> bool {
    to_json(value).lenient().is_some()
}

/// Split rows into pages
///
/// @param items - Array of rows
/// @param capacity - Rows per page (at least 1)
/// @returns Array of `{ index, total_pages, items: [{ seq, item }], is_summary_page }`
#[wasm_bindgen]
pub fn paginate(items: JsValue, capacity: usize) -> Result<JsValue, JsValue> {
    let capacity =
        NonZeroUsize::new(capacity).ok_or_else(|| js_error("capacity must be at least 1"))?;
    let items: Vec<serde_json::Value> = serde_wasm_bindgen::from_value(items)?;
    to_js(&composer::paginate(items, capacity))
}

/// Resolve a search-box value against the current entity listing
///
/// @param raw - Text currently in the input
/// @param listing - Backend listing array, passed on every call
/// @param kind - "customers" or "drivers"
/// @returns `{ resolved_id, canonical_label, rewrite }`
#[wasm_bindgen(js_name = resolveEntity)]
pub fn resolve_entity(raw: &str, listing: JsValue, kind: &str) -> Result<JsValue, JsValue> {
    let schema = match kind {
        "customers" => EntitySchema::customers(),
        "drivers" => EntitySchema::drivers(),
        other => return Err(js_error(format!("unknown entity kind: {other}"))),
    };
    let cache = schema.load(&to_json(listing)).map_err(js_error)?;
    to_js(&composer::resolve(raw, &cache))
}

/// First `|`-separated token of a label
///
/// @param label - Search-box label (e.g., "D001 | นาย ก")
/// @returns The token, or undefined when blank
#[wasm_bindgen(js_name = leadingToken)]
pub fn leading_token(label: &str) -> Option<String> {
    composer::leading_token(label).map(str::to_string)
}

/// Next bill note number for a document date
///
/// @param date - ISO document date
/// @param latest - Highest bill note number issued so far, if any
/// @returns Number such as "BNTS6809000042"
#[wasm_bindgen(js_name = nextBillNoteNumber)]
pub fn next_bill_note_number(date: &str, latest: Option<String>) -> Result<String, JsValue> {
    let date = thai_text::parse_iso_date(date).map_err(js_error)?;
    Ok(composer::next_bill_note_number(date, latest.as_deref()))
}

/// Next credit note number for a document date
///
/// @param date - ISO document date
/// @param existing - Array of credit note numbers already issued
/// @returns Number such as "SSCR8-2501/2568"
#[wasm_bindgen(js_name = nextCreditNoteNumber)]
pub fn next_credit_note_number(date: &str, existing: JsValue) -> Result<String, JsValue> {
    let date = thai_text::parse_iso_date(date).map_err(js_error)?;
    let existing: Vec<String> = serde_wasm_bindgen::from_value(existing)?;
    let existing: Vec<&str> = existing.iter().map(String::as_str).collect();
    Ok(composer::next_credit_note_number(date, &existing))
}

/// Bill note and credit note composer
#[wasm_bindgen]
pub struct DocumentComposer {
    inner: composer::DocumentComposer,
}

#[wasm_bindgen]
impl DocumentComposer {
    /// Create a composer with default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> DocumentComposer {
        DocumentComposer {
            inner: composer::DocumentComposer::default(),
        }
    }

    /// Create a composer from configuration JSON
    ///
    /// @param json - Configuration JSON string
    /// @returns DocumentComposer instance
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<DocumentComposer, JsValue> {
        let config = composer::parse_config(json).map_err(js_error)?;
        Ok(DocumentComposer {
            inner: composer::DocumentComposer::new(config),
        })
    }

    /// Current configuration
    pub fn config(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.config())
    }

    /// Compose a bill note
    ///
    /// @param request - Bill note request JSON string
    /// @returns Composed document object
    #[wasm_bindgen(js_name = composeBillNote)]
    pub fn compose_bill_note(&self, request: &str) -> Result<JsValue, JsValue> {
        let request = composer::parse_bill_note_request(request).map_err(js_error)?;
        let document = self.inner.compose_bill_note(&request).map_err(js_error)?;
        to_js(&document)
    }

    /// Compose a credit note
    ///
    /// @param request - Credit note request JSON string
    /// @returns Composed document object
    #[wasm_bindgen(js_name = composeCreditNote)]
    pub fn compose_credit_note(&self, request: &str) -> Result<JsValue, JsValue> {
        let request = composer::parse_credit_note_request(request).map_err(js_error)?;
        let document = self.inner.compose_credit_note(&request).map_err(js_error)?;
        to_js(&document)
    }
}

impl Default for DocumentComposer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_thai_formatter() {
        assert_eq!(ThaiFormatter::format_number(42.0).unwrap(), "สี่สิบสอง");
        assert_eq!(ThaiFormatter::format_baht(100.0).unwrap(), "หนึ่งร้อยบาทถ้วน");
        assert_eq!(
            ThaiFormatter::format_baht_str("100.50").unwrap(),
            "หนึ่งร้อยบาทห้าสิบสตางค์"
        );
        assert!(ThaiFormatter::format_number(-1.0).is_err());
    }

    #[wasm_bindgen_test]
    fn test_dates() {
        assert_eq!(
            ThaiFormatter::format_date_long("2025-01-22").unwrap(),
            "22 มกราคม 2568"
        );
        assert_eq!(ThaiFormatter::format_date_short("2025-01-05").unwrap(), "05/01/68");
    }

    #[wasm_bindgen_test]
    fn test_render_amount() {
        assert_eq!(
            ThaiFormatter::render_amount("#,###.##", "1234.56").unwrap(),
            "1,234.56"
        );
    }

    #[wasm_bindgen_test]
    fn test_adjusted_line_amount() {
        let amount = adjusted_line_amount(
            JsValue::from_f64(100.0),
            JsValue::from_str("30"),
            JsValue::from_str("abc"),
        );
        assert_eq!(amount, "70");
        assert!(!is_numeric(JsValue::NULL));
    }

    #[wasm_bindgen_test]
    fn test_document_numbers() {
        assert_eq!(
            next_bill_note_number("2025-09-03", Some("BNTS6809000041".to_string())).unwrap(),
            "BNTS6809000042"
        );
        assert!(next_bill_note_number("03/09/2025", None).is_err());
    }

    #[wasm_bindgen_test]
    fn test_leading_token() {
        assert_eq!(leading_token("D001 | นาย ก"), Some("D001".to_string()));
        assert_eq!(leading_token(""), None);
    }

    #[wasm_bindgen_test]
    fn test_compose_bill_note() {
        let composer = DocumentComposer::new();
        let request = r#"{
            "customer_id": 1,
            "invoices": [
                { "invoice_number": "A1", "invoice_date": "2025-01-02",
                  "due_date": "2025-02-01", "amount": "21" }
            ]
        }"#;
        assert!(composer.compose_bill_note(request).is_ok());
        assert!(composer.compose_bill_note(r#"{ "customer_id": 1 }"#).is_err());
    }
}
