//! Credit-note line arithmetic
//!
//! Hand-entered numbers are parsed leniently: an unreadable base price or fine
//! counts as 0, an unreadable quantity counts as 1. Amounts stay in
//! [`Decimal`]; rounding happens only where a value is shown or taxed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thai_text::round_money;

/// A value that may or may not hold a usable number
pub trait LenientInput {
    /// The number, or `None` when the value is missing or unreadable
    fn lenient(&self) -> Option<Decimal>;
}

impl LenientInput for Decimal {
    fn lenient(&self) -> Option<Decimal> {
        Some(*self)
    }
}

impl LenientInput for f64 {
    fn lenient(&self) -> Option<Decimal> {
        if self.is_finite() {
            Decimal::try_from(*self).ok()
        } else {
            None
        }
    }
}

impl LenientInput for i32 {
    fn lenient(&self) -> Option<Decimal> {
        Some(Decimal::from(*self))
    }
}

impl LenientInput for i64 {
    fn lenient(&self) -> Option<Decimal> {
        Some(Decimal::from(*self))
    }
}

impl LenientInput for u32 {
    fn lenient(&self) -> Option<Decimal> {
        Some(Decimal::from(*self))
    }
}

/// Smallest magnitude a `Decimal` can hold
const DECIMAL_EPSILON: f64 = 1e-28;

/// Plain or scientific decimal text.
///
/// Digit-group underscores are not accepted. A finite value too small for
/// 28 fractional digits (such as `1e-40`) reads as zero.
impl LenientInput for str {
    fn lenient(&self) -> Option<Decimal> {
        let text = self.trim();
        if text.is_empty() || text.contains('_') {
            return None;
        }
        Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .ok()
            .or_else(|| {
                text.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() && f.abs() < DECIMAL_EPSILON)
                    .map(|_| Decimal::ZERO)
            })
    }
}

impl LenientInput for String {
    fn lenient(&self) -> Option<Decimal> {
        self.as_str().lenient()
    }
}

impl LenientInput for serde_json::Value {
    fn lenient(&self) -> Option<Decimal> {
        match self {
            serde_json::Value::Number(n) => n.to_string().as_str().lenient(),
            serde_json::Value::String(s) => s.lenient(),
            _ => None,
        }
    }
}

impl<T: LenientInput> LenientInput for Option<T> {
    fn lenient(&self) -> Option<Decimal> {
        self.as_ref().and_then(LenientInput::lenient)
    }
}

impl<T: LenientInput + ?Sized> LenientInput for &T {
    fn lenient(&self) -> Option<Decimal> {
        (**self).lenient()
    }
}

/// A numeric form field kept exactly as it arrived
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawNumber(pub serde_json::Value);

impl LenientInput for RawNumber {
    fn lenient(&self) -> Option<Decimal> {
        self.0.lenient()
    }
}

impl From<Decimal> for RawNumber {
    fn from(value: Decimal) -> Self {
        RawNumber(serde_json::Value::String(value.to_string()))
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        RawNumber(serde_json::Value::String(value.to_string()))
    }
}

impl From<i64> for RawNumber {
    fn from(value: i64) -> Self {
        RawNumber(serde_json::Value::from(value))
    }
}

/// Unit price after the deduction, never below zero
pub fn effective_unit_price(base_price: impl LenientInput, fine: impl LenientInput) -> Decimal {
    let base = base_price.lenient().unwrap_or(Decimal::ZERO);
    let fine = fine.lenient().unwrap_or(Decimal::ZERO);
    base.saturating_sub(fine).max(Decimal::ZERO)
}

/// Quantity as typed, or one unit when it cannot be read
pub fn effective_quantity(quantity: impl LenientInput) -> Decimal {
    quantity.lenient().unwrap_or_else(|| {
        tracing::trace!("unreadable quantity, counting one unit");
        Decimal::ONE
    })
}

/// Line value on a credit note: `max(0, base - fine) * quantity`
///
/// # Examples
/// ```
/// use composer::adjust::adjusted_line_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(adjusted_line_amount(100, 30, 2), Decimal::from(140));
/// assert_eq!(adjusted_line_amount(10, 50, 1), Decimal::ZERO);
/// assert_eq!(adjusted_line_amount(10, 0, "bad"), Decimal::from(10));
/// ```
pub fn adjusted_line_amount(
    base_price: impl LenientInput,
    fine: impl LenientInput,
    quantity: impl LenientInput,
) -> Decimal {
    effective_unit_price(base_price, fine).saturating_mul(effective_quantity(quantity))
}

/// Sum of amounts without intermediate rounding
pub fn sum_amounts<I>(amounts: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .fold(Decimal::ZERO, |acc, amount| acc.saturating_add(amount))
}

/// Amount including VAT, rounded to satang
pub fn with_vat(amount: Decimal, vat_rate: Decimal) -> Decimal {
    round_money(amount.saturating_mul(Decimal::ONE.saturating_add(vat_rate)))
}

/// Before/after values of a single credit-note line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineAdjustment {
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub adjusted_unit_price: Decimal,
    /// `unit_price * quantity`
    pub old_amount: Decimal,
    /// `adjusted_unit_price * quantity`
    pub new_amount: Decimal,
    /// `max(0, old_amount - new_amount)`
    pub reduction: Decimal,
}

/// Compute the before/after values of a credit-note line
pub fn adjust_line(
    base_price: impl LenientInput,
    fine: impl LenientInput,
    quantity: impl LenientInput,
) -> LineAdjustment {
    let unit_price = base_price.lenient().unwrap_or(Decimal::ZERO);
    let adjusted_unit_price = effective_unit_price(unit_price, fine);
    let quantity = effective_quantity(quantity);

    let old_amount = unit_price.saturating_mul(quantity);
    let new_amount = adjusted_unit_price.saturating_mul(quantity);
    let reduction = old_amount.saturating_sub(new_amount).max(Decimal::ZERO);

    LineAdjustment {
        quantity,
        unit_price,
        adjusted_unit_price,
        old_amount,
        new_amount,
        reduction,
    }
}

/// Credit-note totals: reduced value, VAT on it, and the grand total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditTotals {
    pub subtotal: Decimal,
    pub vat: Decimal,
    pub grand_total: Decimal,
}

/// Total the reductions of a credit note and apply VAT
pub fn credit_totals<I>(reductions: I, vat_rate: Decimal) -> CreditTotals
where
    I: IntoIterator<Item = Decimal>,
{
    let subtotal = sum_amounts(reductions);
    let vat = round_money(subtotal.saturating_mul(vat_rate));
    let grand_total = round_money(subtotal.saturating_add(vat));

    CreditTotals {
        subtotal,
        vat,
        grand_total,
    }
}
