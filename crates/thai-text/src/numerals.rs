//! Reading of integers as Thai words
//!
//! Digits are read most significant first. Each digit lands on a place inside a
//! six-digit group (ones .. hundred-thousands) and "ล้าน" is emitted at every
//! group boundary once a non-zero digit has been read.

/// Thai number names (0-9)
pub(crate) const NUMBER_NAMES: [&str; 10] = [
    "ศูนย์",
    "หนึ่ง",
    "สอง",
    "สาม",
    "สี่",
    "ห้า",
    "หก",
    "เจ็ด",
    "แปด",
    "เก้า",
];

/// Place suffixes for positions 0..5 inside a six-digit group
pub(crate) const PLACE_NAMES: [&str; 6] = ["", "สิบ", "ร้อย", "พัน", "หมื่น", "แสน"];

/// Magnitude word between six-digit groups
pub(crate) const MILLION: &str = "ล้าน";

/// Special word for a tens digit of 2
pub(crate) const TWENTY_PREFIX: &str = "ยี่";

/// Special word for a ones digit of 1 following a higher digit
pub(crate) const ONE_UNIT: &str = "เอ็ด";

/// How a single non-zero digit is spoken before its place suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DigitWord {
    /// Ordinary digit name
    Plain,
    /// Digit name elided, only the place suffix is read (สิบ)
    Elided,
    /// ยี่ in place of สอง
    Twenty,
    /// เอ็ด in place of หนึ่ง
    OneUnit,
}

/// Irregular reading rules keyed by `(digit, place, has_higher_digit)`.
///
/// `None` in a key matches any value. The first matching rule wins; a digit
/// without a matching rule is read plainly.
const RULES: [(Option<u8>, Option<usize>, Option<bool>, DigitWord); 3] = [
    (Some(2), Some(1), None, DigitWord::Twenty),
    (Some(1), Some(1), None, DigitWord::Elided),
    (Some(1), Some(0), Some(true), DigitWord::OneUnit),
];

fn lookup(digit: u8, place: usize, has_higher: bool) -> DigitWord {
    RULES
        .iter()
        .find(|(d, p, h, _)| {
            d.map_or(true, |d| d == digit)
                && p.map_or(true, |p| p == place)
                && h.map_or(true, |h| h == has_higher)
        })
        .map(|rule| rule.3)
        .unwrap_or(DigitWord::Plain)
}

/// Read a string of ASCII decimal digits as Thai words.
///
/// Leading zeros are ignored. Returns an empty string when every digit is zero;
/// callers decide how zero is spelled.
pub(crate) fn read_digits(digits: &[u8]) -> String {
    let len = digits.len();
    let mut seen_non_zero = false;
    let mut out = String::new();

    for (i, &digit) in digits.iter().enumerate() {
        let position = len - i - 1;
        let place = position % 6;

        if digit > 0 {
            let word = match lookup(digit, place, seen_non_zero) {
                DigitWord::Plain => NUMBER_NAMES[digit as usize],
                DigitWord::Elided => "",
                DigitWord::Twenty => TWENTY_PREFIX,
                DigitWord::OneUnit => ONE_UNIT,
            };
            out.push_str(word);
            out.push_str(PLACE_NAMES[place]);
            seen_non_zero = true;
        }

        if place == 0 && position > 0 && seen_non_zero {
            out.push_str(MILLION);
        }
    }

    out
}

/// Convert an integer into its decimal digits, most significant first
pub(crate) fn digits_of(n: u128) -> Vec<u8> {
    n.to_string().bytes().map(|b| b - b'0').collect()
}
