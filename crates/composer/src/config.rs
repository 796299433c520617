//! Composer configuration

use crate::{ComposeError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

const BILL_NOTE_ITEMS_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(12) {
    Some(n) => n,
    None => unreachable!(),
};

const CREDIT_NOTE_ITEMS_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

/// Default reason printed on credit notes ("incorrect product price")
pub const DEFAULT_CREDIT_NOTE_REASON: &str = "คิดราคาสินค้าไม่ถูกต้อง";

/// Default amount display pattern
pub const DEFAULT_AMOUNT_FORMAT: &str = "#,###.##";

/// Root configuration
///
/// ```json
/// {
///   "billNote": { "itemsPerPage": 12 },
///   "creditNote": { "itemsPerPage": 10, "vatRate": "0.07" },
///   "amountFormat": "#,###.##"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComposerConfig {
    pub bill_note: BillNoteConfig,
    pub credit_note: CreditNoteConfig,
    /// Pattern used for every printed amount
    pub amount_format: String,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            bill_note: BillNoteConfig::default(),
            credit_note: CreditNoteConfig::default(),
            amount_format: DEFAULT_AMOUNT_FORMAT.to_string(),
        }
    }
}

impl ComposerConfig {
    /// Check values serde cannot reject on its own
    pub fn validate(&self) -> Result<()> {
        if self.credit_note.vat_rate < Decimal::ZERO {
            return Err(ComposeError::ConfigError(format!(
                "creditNote.vatRate must not be negative: {}",
                self.credit_note.vat_rate
            )));
        }
        if !self.amount_format.chars().any(|c| c == '#' || c == '0') {
            return Err(ComposeError::ConfigError(format!(
                "amountFormat has no digit placeholders: {:?}",
                self.amount_format
            )));
        }
        Ok(())
    }
}

/// Bill note layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BillNoteConfig {
    pub items_per_page: NonZeroUsize,
}

impl Default for BillNoteConfig {
    fn default() -> Self {
        Self {
            items_per_page: BILL_NOTE_ITEMS_PER_PAGE,
        }
    }
}

/// Credit note layout and tax
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreditNoteConfig {
    pub items_per_page: NonZeroUsize,
    pub vat_rate: Decimal,
    pub reason: String,
}

impl Default for CreditNoteConfig {
    fn default() -> Self {
        Self {
            items_per_page: CREDIT_NOTE_ITEMS_PER_PAGE,
            vat_rate: Decimal::new(7, 2),
            reason: DEFAULT_CREDIT_NOTE_REASON.to_string(),
        }
    }
}
