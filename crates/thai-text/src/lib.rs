//! Thai Text - Thai numeral, currency and date formatting
//!
//! This crate provides:
//! - Thai number reading (หนึ่ง, สอง, สาม...)
//! - Thai currency text (บาท, สตางค์, ถ้วน) for printed totals
//! - Buddhist-era date formatting
//! - Amount display patterns (`#,###.##`)
//!
//! # Example
//!
//! ```ignore
//! use rust_decimal::Decimal;
//! use thai_text::{format_thai_baht, format_thai_number, render_amount};
//!
//! let text = format_thai_number(42);  // "สี่สิบสอง"
//! let baht = format_thai_baht(Decimal::new(10050, 2))?; // "หนึ่งร้อยบาทห้าสิบสตางค์"
//! let shown = render_amount("#,###.##", Decimal::new(123456, 2)); // "1,234.56"
//! ```

mod formatter;
mod numerals;

// Re-export commonly used formatting functions
pub use formatter::{
    format_be_date, format_be_date_short, format_thai_baht, format_thai_baht_f64,
    format_thai_baht_str, format_thai_date_long, format_thai_number, parse_amount,
    parse_iso_date, render_amount, round_money,
};

use thiserror::Error;

/// Errors that can occur during Thai text formatting
#[derive(Debug, Error)]
pub enum ThaiTextError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Result type for Thai text operations
pub type Result<T> = std::result::Result<T, ThaiTextError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_format_thai_number() {
        assert_eq!(format_thai_number(0), "ศูนย์");
        assert_eq!(format_thai_number(1), "หนึ่ง");
        assert_eq!(format_thai_number(10), "สิบ");
        assert_eq!(format_thai_number(11), "สิบเอ็ด");
        assert_eq!(format_thai_number(21), "ยี่สิบเอ็ด");
        assert_eq!(format_thai_number(100), "หนึ่งร้อย");
    }

    #[test]
    fn test_format_thai_baht() {
        assert_eq!(format_thai_baht(Decimal::ZERO).unwrap(), "ศูนย์บาทถ้วน");
        assert_eq!(format_thai_baht(Decimal::ONE).unwrap(), "หนึ่งบาทถ้วน");
        assert_eq!(
            format_thai_baht(Decimal::new(50, 2)).unwrap(),
            "ศูนย์บาทห้าสิบสตางค์"
        );
    }

    #[test]
    fn test_error_display() {
        let err = ThaiTextError::InvalidAmount("-1".to_string());
        assert_eq!(err.to_string(), "Invalid amount: -1");
    }
}
