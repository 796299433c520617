//! Thai number, currency, and date formatting

use crate::numerals::{digits_of, read_digits, NUMBER_NAMES};
use crate::{Result, ThaiTextError};
use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Currency-major word
const BAHT: &str = "บาท";

/// Currency-minor word
const SATANG: &str = "สตางค์";

/// "Exact" marker used when there are no satang
const EXACT: &str = "ถ้วน";

/// Offset between the Gregorian and Buddhist calendars
const BUDDHIST_ERA_OFFSET: i32 = 543;

/// Thai month names (long)
const THAI_MONTHS_LONG: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

/// Format an integer as Thai text
///
/// # Examples
/// ```
/// use thai_text::format_thai_number;
/// assert_eq!(format_thai_number(0), "ศูนย์");
/// assert_eq!(format_thai_number(21), "ยี่สิบเอ็ด");
/// assert_eq!(format_thai_number(100), "หนึ่งร้อย");
/// ```
pub fn format_thai_number(n: u128) -> String {
    if n == 0 {
        return NUMBER_NAMES[0].to_string();
    }
    read_digits(&digits_of(n))
}

/// Round a monetary amount to two fractional digits (half away from zero)
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount as Thai Baht text
///
/// The amount is rounded to satang first. Negative amounts are rejected.
///
/// # Examples
/// ```
/// use rust_decimal::Decimal;
/// use thai_text::format_thai_baht;
///
/// assert_eq!(format_thai_baht(Decimal::ZERO).unwrap(), "ศูนย์บาทถ้วน");
/// assert_eq!(format_thai_baht(Decimal::new(10050, 2)).unwrap(), "หนึ่งร้อยบาทห้าสิบสตางค์");
/// ```
pub fn format_thai_baht(amount: Decimal) -> Result<String> {
    if amount < Decimal::ZERO {
        return Err(ThaiTextError::InvalidAmount(format!(
            "amount must not be negative: {amount}"
        )));
    }

    let rounded = round_money(amount);
    let baht = rounded.trunc().to_u128().ok_or_else(|| {
        ThaiTextError::InvalidAmount(format!("integer part out of range: {amount}"))
    })?;
    let satang = (rounded.fract() * Decimal::ONE_HUNDRED)
        .to_u8()
        .ok_or_else(|| ThaiTextError::InvalidAmount(format!("invalid satang: {amount}")))?;

    let mut text = format_thai_number(baht);
    text.push_str(BAHT);

    if satang == 0 {
        text.push_str(EXACT);
    } else {
        text.push_str(&format_thai_number(u128::from(satang)));
        text.push_str(SATANG);
    }

    Ok(text)
}

/// Format a binary floating-point amount as Thai Baht text
///
/// NaN and infinities are rejected.
pub fn format_thai_baht_f64(amount: f64) -> Result<String> {
    if !amount.is_finite() {
        return Err(ThaiTextError::InvalidAmount(format!(
            "amount is not finite: {amount}"
        )));
    }
    let amount = Decimal::try_from(amount)
        .map_err(|e| ThaiTextError::InvalidAmount(format!("{amount}: {e}")))?;
    format_thai_baht(amount)
}

/// Parse a textual amount and format it as Thai Baht text
pub fn format_thai_baht_str(amount: &str) -> Result<String> {
    format_thai_baht(parse_amount(amount)?)
}

/// Parse a decimal amount, accepting plain and scientific notation
pub fn parse_amount(text: &str) -> Result<Decimal> {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| ThaiTextError::InvalidAmount(format!("not a number: {text:?}")))
}

/// Parse an ISO-8601 calendar date (`YYYY-MM-DD`)
///
/// A trailing time component (`2025-01-22T10:00:00`) is ignored.
pub fn parse_iso_date(text: &str) -> Result<NaiveDate> {
    let text = text.trim();
    let date_part = text.split('T').next().unwrap_or(text);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|e| ThaiTextError::InvalidDate(format!("{text}: {e}")))
}

/// Format a date in long Thai format (e.g., "25 มกราคม 2568")
pub fn format_thai_date_long(date: NaiveDate) -> String {
    let month_name = THAI_MONTHS_LONG[date.month0() as usize];
    format!(
        "{} {} {}",
        date.day(),
        month_name,
        date.year() + BUDDHIST_ERA_OFFSET
    )
}

/// Format a date as `dd/mm/yyyy` in the Buddhist era (e.g., "05/01/2568")
pub fn format_be_date(date: NaiveDate) -> String {
    format!(
        "{:02}/{:02}/{}",
        date.day(),
        date.month(),
        date.year() + BUDDHIST_ERA_OFFSET
    )
}

/// Format a date as `dd/mm/yy` in the Buddhist era (e.g., "05/01/68")
pub fn format_be_date_short(date: NaiveDate) -> String {
    format!(
        "{:02}/{:02}/{:02}",
        date.day(),
        date.month(),
        (date.year() + BUDDHIST_ERA_OFFSET).rem_euclid(100)
    )
}

/// Render an amount with a formatting pattern
///
/// Supports patterns like "#,###.##" for thousand separators and decimal places.
///
/// # Arguments
/// * `format` - Format pattern
/// * `n` - Amount to format
pub fn render_amount(format: &str, n: Decimal) -> String {
    let (precision, thousand_sep) = parse_format(format);

    let mut rounded = n
        .abs()
        .round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(precision);

    let repr = rounded.to_string();
    let (int_str, frac_str) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    let int_str = format_with_thousands(int_str, thousand_sep);

    let sign = if n.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    if frac_str.is_empty() {
        format!("{sign}{int_str}")
    } else {
        format!("{sign}{int_str}.{frac_str}")
    }
}

/// Most fractional digits a `Decimal` can carry
const MAX_PRECISION: u32 = 28;

/// Parse format pattern to extract precision and thousands separator
///
/// Precision is capped at [`MAX_PRECISION`].
fn parse_format(format: &str) -> (u32, Option<char>) {
    if format.is_empty() {
        return (2, Some(','));
    }

    let decimal_pos = format.rfind('.');

    let precision = match decimal_pos {
        Some(pos) => format[pos + 1..]
            .chars()
            .filter(|c| *c == '#' || *c == '0')
            .count() as u32,
        None => 0,
    }
    .min(MAX_PRECISION);

    let integer_part = decimal_pos.map_or(format, |pos| &format[..pos]);
    let thousand_sep = integer_part.contains(',').then_some(',');

    (precision, thousand_sep)
}

/// Insert thousand separators into a string of digits
fn format_with_thousands(digits: &str, sep: Option<char>) -> String {
    let Some(sep) = sep else {
        return digits.to_string();
    };

    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(sep);
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_thai_number_basic() {
        assert_eq!(format_thai_number(0), "ศูนย์");
        assert_eq!(format_thai_number(1), "หนึ่ง");
        assert_eq!(format_thai_number(2), "สอง");
        assert_eq!(format_thai_number(9), "เก้า");
    }

    #[test]
    fn test_format_thai_number_tens() {
        assert_eq!(format_thai_number(10), "สิบ");
        assert_eq!(format_thai_number(11), "สิบเอ็ด");
        assert_eq!(format_thai_number(20), "ยี่สิบ");
        assert_eq!(format_thai_number(21), "ยี่สิบเอ็ด");
        assert_eq!(format_thai_number(30), "สามสิบ");
    }

    #[test]
    fn test_format_thai_number_large() {
        assert_eq!(format_thai_number(1000), "หนึ่งพัน");
        assert_eq!(format_thai_number(10000), "หนึ่งหมื่น");
        assert_eq!(format_thai_number(100000), "หนึ่งแสน");
        assert_eq!(format_thai_number(1000000), "หนึ่งล้าน");
        assert_eq!(format_thai_number(10000000), "สิบล้าน");
    }

    #[test]
    fn test_format_thai_baht() {
        assert_eq!(format_thai_baht(dec!(0.00)).unwrap(), "ศูนย์บาทถ้วน");
        assert_eq!(format_thai_baht(dec!(1.00)).unwrap(), "หนึ่งบาทถ้วน");
        assert_eq!(format_thai_baht(dec!(21.00)).unwrap(), "ยี่สิบเอ็ดบาทถ้วน");
        assert_eq!(format_thai_baht(dec!(0.25)).unwrap(), "ศูนย์บาทยี่สิบห้าสตางค์");
        assert_eq!(
            format_thai_baht(dec!(100.50)).unwrap(),
            "หนึ่งร้อยบาทห้าสิบสตางค์"
        );
    }

    #[test]
    fn test_format_thai_baht_single_satang() {
        assert_eq!(format_thai_baht(dec!(5.01)).unwrap(), "ห้าบาทหนึ่งสตางค์");
        assert_eq!(format_thai_baht(dec!(5.11)).unwrap(), "ห้าบาทสิบเอ็ดสตางค์");
    }

    #[test]
    fn test_format_thai_baht_rounds_to_satang() {
        assert_eq!(format_thai_baht(dec!(1.005)).unwrap(), "หนึ่งบาทหนึ่งสตางค์");
        assert_eq!(format_thai_baht(dec!(0.994)).unwrap(), "ศูนย์บาทเก้าสิบเก้าสตางค์");
        assert_eq!(format_thai_baht(dec!(0.999)).unwrap(), "หนึ่งบาทถ้วน");
    }

    #[test]
    fn test_format_thai_baht_negative() {
        assert!(matches!(
            format_thai_baht(dec!(-1)),
            Err(ThaiTextError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_format_thai_baht_f64() {
        assert_eq!(format_thai_baht_f64(100.5).unwrap(), "หนึ่งร้อยบาทห้าสิบสตางค์");
        assert!(format_thai_baht_f64(f64::NAN).is_err());
        assert!(format_thai_baht_f64(f64::INFINITY).is_err());
        assert!(format_thai_baht_f64(-0.5).is_err());
    }

    #[test]
    fn test_format_thai_baht_str() {
        assert_eq!(format_thai_baht_str(" 21 ").unwrap(), "ยี่สิบเอ็ดบาทถ้วน");
        assert_eq!(format_thai_baht_str("1e2").unwrap(), "หนึ่งร้อยบาทถ้วน");
        assert!(format_thai_baht_str("abc").is_err());
        assert!(format_thai_baht_str("").is_err());
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2025-01-22").unwrap(), date(2025, 1, 22));
        assert_eq!(
            parse_iso_date("2025-01-22T08:30:00").unwrap(),
            date(2025, 1, 22)
        );
        assert!(matches!(
            parse_iso_date("22/01/2025"),
            Err(ThaiTextError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_format_thai_date_long() {
        assert_eq!(format_thai_date_long(date(2025, 1, 22)), "22 มกราคม 2568");
        assert_eq!(format_thai_date_long(date(2024, 12, 5)), "5 ธันวาคม 2567");
    }

    #[test]
    fn test_format_be_date() {
        assert_eq!(format_be_date(date(2025, 1, 5)), "05/01/2568");
        assert_eq!(format_be_date_short(date(2025, 1, 5)), "05/01/68");
        assert_eq!(format_be_date_short(date(2032, 3, 9)), "09/03/75");
    }

    #[test]
    fn test_render_amount() {
        assert_eq!(render_amount("#,###.##", dec!(1234.56)), "1,234.56");
        assert_eq!(render_amount("#,###.##", dec!(1000000)), "1,000,000.00");
        assert_eq!(render_amount("#,###.##", dec!(-100.5)), "-100.50");
        assert_eq!(render_amount("#,###.##", dec!(0.005)), "0.01");
        assert_eq!(render_amount("#,###", dec!(1234.5)), "1,235");
        assert_eq!(render_amount("###.##", dec!(1234.5)), "1234.50");
        assert_eq!(render_amount("", dec!(12)), "12.00");
    }

    #[test]
    fn test_render_amount_beyond_decimal_scale() {
        assert_eq!(
            render_amount("#,###.##", Decimal::MAX),
            "79,228,162,514,264,337,593,543,950,335"
        );

        let thirty = format!("#.{}", "#".repeat(30));
        assert_eq!(parse_format(&thirty), (MAX_PRECISION, None));
        assert_eq!(
            render_amount(&thirty, dec!(0.5)),
            format!("0.5{}", "0".repeat(27))
        );
    }

    #[test]
    fn test_render_amount_negative_zero() {
        assert_eq!(render_amount("#,###.##", dec!(-0.001)), "0.00");
    }

    #[test]
    fn test_format_with_thousands() {
        assert_eq!(format_with_thousands("1000", Some(',')), "1,000");
        assert_eq!(format_with_thousands("1000000", Some(',')), "1,000,000");
        assert_eq!(format_with_thousands("100", Some(',')), "100");
        assert_eq!(format_with_thousands("123456", None), "123456");
    }
}
