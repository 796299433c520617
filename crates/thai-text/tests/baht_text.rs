//! Round-trip checks for Thai currency text
//!
//! The decoder below reads the words back into satang so the formatter can be
//! checked against arbitrary amounts.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thai_text::{format_thai_baht, format_thai_number};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Digit(u128),
    Place(u128),
    Million,
}

const WORDS: &[(&str, Token)] = &[
    ("ศูนย์", Token::Digit(0)),
    ("หนึ่ง", Token::Digit(1)),
    ("เอ็ด", Token::Digit(1)),
    ("สอง", Token::Digit(2)),
    ("ยี่", Token::Digit(2)),
    ("สาม", Token::Digit(3)),
    ("สี่", Token::Digit(4)),
    ("ห้า", Token::Digit(5)),
    ("หก", Token::Digit(6)),
    ("เจ็ด", Token::Digit(7)),
    ("แปด", Token::Digit(8)),
    ("เก้า", Token::Digit(9)),
    ("สิบ", Token::Place(10)),
    ("ร้อย", Token::Place(100)),
    ("พัน", Token::Place(1_000)),
    ("หมื่น", Token::Place(10_000)),
    ("แสน", Token::Place(100_000)),
    ("ล้าน", Token::Million),
];

fn tokenize(mut text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    while !text.is_empty() {
        let (word, token) = WORDS
            .iter()
            .filter(|(w, _)| text.starts_with(w))
            .max_by_key(|(w, _)| w.len())
            .unwrap_or_else(|| panic!("unknown word at {text:?}"));
        tokens.push(*token);
        text = &text[word.len()..];
    }
    tokens
}

fn decode_number(text: &str) -> u128 {
    let mut total = 0u128;
    let mut group = 0u128;
    let mut pending: Option<u128> = None;

    for token in tokenize(text) {
        match token {
            Token::Digit(d) => {
                assert!(pending.is_none(), "two digits in a row in {text:?}");
                pending = Some(d);
            }
            Token::Place(value) => group += pending.take().unwrap_or(1) * value,
            Token::Million => {
                group += pending.take().unwrap_or(0);
                total = (total + group) * 1_000_000;
                group = 0;
            }
        }
    }

    total + group + pending.unwrap_or(0)
}

/// Decode Thai currency text back into satang
fn decode_baht(text: &str) -> u128 {
    let (integer, rest) = text.split_once("บาท").expect("missing บาท");
    let baht = decode_number(integer);
    let satang = if rest == "ถ้วน" {
        0
    } else {
        let words = rest.strip_suffix("สตางค์").expect("missing สตางค์");
        decode_number(words)
    };
    baht * 100 + satang
}

#[test]
fn test_zero() {
    assert_eq!(format_thai_baht(dec!(0.00)).unwrap(), "ศูนย์บาทถ้วน");
}

#[test]
fn test_single_one_reads_plain() {
    let text = format_thai_baht(dec!(1.00)).unwrap();
    assert_eq!(text, "หนึ่งบาทถ้วน");
    assert!(!text.contains("เอ็ด"));
}

// The satang clause is read as a number of its own, so a lone satang is
// "หนึ่ง" rather than the "เอ็ด" some hand-written readers produce for "01".
#[test]
fn test_single_satang_reads_plain() {
    assert_eq!(format_thai_baht(dec!(0.01)).unwrap(), "ศูนย์บาทหนึ่งสตางค์");
    assert_eq!(format_thai_baht(dec!(7.01)).unwrap(), "เจ็ดบาทหนึ่งสตางค์");
    assert_eq!(format_thai_baht(dec!(7.21)).unwrap(), "เจ็ดบาทยี่สิบเอ็ดสตางค์");
}

#[test]
fn test_twenty_one_uses_irregular_words() {
    let text = format_thai_baht(dec!(21.00)).unwrap();
    assert_eq!(text, "ยี่สิบเอ็ดบาทถ้วน");
    assert!(!text.contains("สอง"));
    assert!(!text.contains("หนึ่ง"));
}

#[test]
fn test_satang_clause() {
    let text = format_thai_baht(dec!(100.50)).unwrap();
    assert!(text.ends_with("สตางค์"));
    assert!(!text.ends_with("ถ้วน"));
}

#[test]
fn test_large_amounts() {
    assert_eq!(
        format_thai_baht(dec!(1234567.89)).unwrap(),
        "หนึ่งล้านสองแสนสามหมื่นสี่พันห้าร้อยหกสิบเจ็ดบาทแปดสิบเก้าสตางค์"
    );
    assert_eq!(
        format_thai_baht(dec!(2000000000000)).unwrap(),
        "สองล้านล้านบาทถ้วน"
    );
}

#[test]
fn test_decoder_reads_known_values() {
    assert_eq!(decode_number("หนึ่งล้านเอ็ดล้าน"), 1_000_001_000_000);
    assert_eq!(decode_number("สิบเอ็ด"), 11);
    assert_eq!(decode_baht("ศูนย์บาทหนึ่งสตางค์"), 1);
}

#[test]
fn test_format_number_matches_decoder() {
    for n in [0u128, 7, 10, 15, 99, 101, 110, 1_001, 20_021, 999_999, 1_000_000, 10_000_011] {
        assert_eq!(decode_number(&format_thai_number(n)), n, "n = {n}");
    }
}

proptest! {
    #[test]
    fn words_decode_to_amount(cents in 0u64..100_000_000_000_000_000) {
        let amount = Decimal::from_i128_with_scale(i128::from(cents), 2);
        let text = format_thai_baht(amount).unwrap();
        prop_assert_eq!(decode_baht(&text), u128::from(cents));
    }

    #[test]
    fn words_decode_to_rounded_amount(mills in 0u64..1_000_000_000_000) {
        let amount = Decimal::new(mills as i64, 3);
        let text = format_thai_baht(amount).unwrap();
        let expected = u128::from((mills + 5) / 10);
        prop_assert_eq!(decode_baht(&text), expected);
    }

    #[test]
    fn words_always_end_with_a_currency_clause(cents in 0u64..10_000_000_000) {
        let amount = Decimal::from_i128_with_scale(i128::from(cents), 2);
        let text = format_thai_baht(amount).unwrap();
        prop_assert!(text.contains("บาท"));
        prop_assert!(text.ends_with("ถ้วน") || text.ends_with("สตางค์"));
    }
}
