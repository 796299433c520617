//! Composer - billing document composition
//!
//! This crate provides:
//! - Credit-note line arithmetic with lenient parsing of typed numbers
//! - Fixed-capacity pagination with a single summary page
//! - `"code | name"` search-box resolution against an entity cache
//! - Bill note and credit note assembly
//! - Bill note and credit note number allocation
//!
//! # Example
//!
//! ```ignore
//! use composer::{parse_config, resolve, DocumentComposer, EntitySchema};
//!
//! let customers = EntitySchema::customers().load_str(all_customers_json)?;
//! let customer = resolve(search_box_text, &customers);
//!
//! let composer = DocumentComposer::new(parse_config(config_json)?);
//! let mut request = composer::parse_bill_note_request(request_json)?;
//! request.customer_id = customer.resolved_id;
//! let document = composer.compose_bill_note(&request)?;
//! ```

pub mod adjust;
mod composer;
pub mod config;
pub mod numbering;
pub mod paginate;
pub mod parser;
pub mod resolver;
mod schema;

pub use adjust::{adjust_line, adjusted_line_amount, LenientInput, RawNumber};
pub use composer::DocumentComposer;
pub use config::ComposerConfig;
pub use numbering::{next_bill_note_number, next_credit_note_number};
pub use paginate::paginate;
pub use parser::{parse_bill_note_request, parse_config, parse_credit_note_request};
pub use resolver::{leading_token, normalize_label, resolve, EntitySchema};
pub use schema::*;

use thiserror::Error;

/// Errors that can occur while composing documents
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("Document has no line items and no header context")]
    EmptyDocument,

    #[error("Unresolved entity: {0}")]
    UnresolvedEntity(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to parse input: {0}")]
    ParseError(String),

    #[error("Text error: {0}")]
    TextError(#[from] thai_text::ThaiTextError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for composer operations
pub type Result<T> = std::result::Result<T, ComposeError>;
