//! Document data model

use crate::adjust::RawNumber;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque backend identifier (numeric primary key or text code)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{n}"),
            EntityId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        EntityId::Number(value)
    }
}

impl From<i32> for EntityId {
    fn from(value: i32) -> Self {
        EntityId::Number(i64::from(value))
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId::Text(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        EntityId::Text(value)
    }
}

/// Kind of printable document
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    BillNote,
    CreditNote,
}

impl DocumentKind {
    /// Printed document title
    pub fn title(self) -> &'static str {
        match self {
            DocumentKind::BillNote => "ใบวางบิล",
            DocumentKind::CreditNote => "ใบลดหนี้",
        }
    }
}

/// Invoice listed on a bill note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub invoice_number: String,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    pub amount: Decimal,
}

/// Line on a credit note
///
/// Numeric fields are kept as typed and degrade when used (see [`crate::adjust`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditNoteLine {
    #[serde(default)]
    pub invoice_number: String,

    #[serde(default)]
    pub invoice_date: Option<NaiveDate>,

    #[serde(default, alias = "cf_itemname")]
    pub description: String,

    /// Unit price before the deduction
    #[serde(default)]
    pub base_price: RawNumber,

    /// Per-unit deduction
    #[serde(default)]
    pub fine: RawNumber,

    #[serde(default)]
    pub quantity: RawNumber,
}

/// A line item tagged with its 1-based position in the whole document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sequenced<T> {
    pub seq: usize,
    pub item: T,
}

/// One printable page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// 1-based page number
    pub index: usize,
    pub total_pages: usize,
    pub items: Vec<Sequenced<T>>,
    /// Only the last page carries the summary block
    pub is_summary_page: bool,
}

impl<T> Page<T> {
    /// Page counter as printed (e.g. "1 / 3")
    pub fn label(&self) -> String {
        format!("{} / {}", self.index, self.total_pages)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cached backend record used for search-box resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: EntityId,
    pub code: String,
    pub name: String,

    /// Alternate name fields, tried in order when `name` is blank
    #[serde(default)]
    pub alt_names: Vec<String>,
}

impl EntityRecord {
    pub fn new(id: impl Into<EntityId>, code: &str, name: &str) -> Self {
        Self {
            id: id.into(),
            code: code.to_string(),
            name: name.to_string(),
            alt_names: Vec::new(),
        }
    }

    /// Add an alternate name used when the primary name is blank
    pub fn with_alt_name(mut self, name: &str) -> Self {
        self.alt_names.push(name.to_string());
        self
    }

    /// First non-blank name, trimmed
    pub fn display_name(&self) -> &str {
        std::iter::once(&self.name)
            .chain(&self.alt_names)
            .map(|n| n.trim())
            .find(|n| !n.is_empty())
            .unwrap_or("")
    }
}

/// Outcome of resolving a search-box value against the entity cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// Canonical id, absent while the text matches nothing
    pub resolved_id: Option<EntityId>,

    /// Label to show in the input field
    pub canonical_label: String,

    /// True when `canonical_label` differs from what was typed
    pub rewrite: bool,
}

impl ResolutionResult {
    pub fn is_resolved(&self) -> bool {
        self.resolved_id.is_some()
    }
}

/// Customer branch as printed on tax documents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    #[default]
    HeadOffice,
    Branch(String),
}

impl Branch {
    /// Build from the backend's head-office flag and branch code
    pub fn from_flags(head_office: bool, branch: Option<&str>) -> Self {
        if head_office {
            Branch::HeadOffice
        } else {
            Branch::Branch(branch.unwrap_or_default().trim().to_string())
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Branch::HeadOffice => f.write_str("สำนักงานใหญ่"),
            Branch::Branch(code) => f.write_str(code),
        }
    }
}

/// Customer block printed on every page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerInfo {
    #[serde(default)]
    pub person_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub tax_id: String,
    #[serde(default)]
    pub branch: Branch,
}

/// Header context supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentHeader {
    /// Absent until the document has been saved
    #[serde(default)]
    pub document_number: Option<String>,
    pub document_date: NaiveDate,
    #[serde(default)]
    pub customer: Option<CustomerInfo>,
}

/// Header fields as printed, with blanks replaced by placeholders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderView {
    pub title: String,
    pub document_number: String,
    pub document_date: String,
    pub person_id: String,
    pub customer_name: String,
    pub address: String,
    pub tax_id: String,
    pub branch: String,
}

/// Request to compose a bill note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillNoteRequest {
    #[serde(default)]
    pub customer_id: Option<EntityId>,
    #[serde(default)]
    pub header: Option<DocumentHeader>,
    #[serde(default)]
    pub invoices: Vec<InvoiceLine>,
}

/// Request to compose a credit note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditNoteRequest {
    #[serde(default)]
    pub customer_id: Option<EntityId>,
    #[serde(default)]
    pub header: Option<DocumentHeader>,
    #[serde(default)]
    pub items: Vec<CreditNoteLine>,
    /// Overrides the configured default reason
    #[serde(default)]
    pub reason: Option<String>,
}

/// Bill note table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillNoteRow {
    pub invoice_number: String,
    /// `dd/mm/yy`, Buddhist era
    pub invoice_date: String,
    /// `dd/mm/yy`, Buddhist era
    pub due_date: String,
    pub amount: Decimal,
    pub amount_display: String,
}

/// Credit note table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditNoteRow {
    pub invoice_number: String,
    /// `dd/mm/yyyy`, Buddhist era; empty when unknown
    pub invoice_date: String,
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub adjusted_unit_price: Decimal,
    pub old_amount: Decimal,
    pub new_amount: Decimal,
    pub reduction: Decimal,
    pub old_amount_with_vat: Decimal,
    pub new_amount_with_vat: Decimal,
    pub old_amount_display: String,
    pub new_amount_display: String,
}

/// Totals block printed on the summary page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Sum of the line values as listed
    pub line_total: Decimal,
    /// Amount the tax is computed on
    pub subtotal: Decimal,
    #[serde(default)]
    pub vat: Option<Decimal>,
    pub grand_total: Decimal,
    pub grand_total_display: String,
    /// Grand total in Thai words
    pub grand_total_text: String,
}

/// Fully laid-out document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposedDocument<R> {
    pub kind: DocumentKind,
    pub customer_id: EntityId,
    pub header: HeaderView,
    pub pages: Vec<Page<R>>,
    pub summary: Summary,
    #[serde(default)]
    pub reason: Option<String>,
}

impl<R> ComposedDocument<R> {
    /// The page that carries the summary block
    pub fn summary_page(&self) -> Option<&Page<R>> {
        self.pages.iter().find(|p| p.is_summary_page)
    }

    /// Number of line items across all pages
    pub fn item_count(&self) -> usize {
        self.pages.iter().map(Page::len).sum()
    }
}
