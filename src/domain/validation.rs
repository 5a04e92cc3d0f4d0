//! Field-level validation rules.
//!
//! Every rule takes the raw, possibly unset value of one business field and
//! either hands back the value to put on the wire or a [`ValidationError`]
//! naming the field. An absent value and an empty string are both "unset".
//! Checks are purely syntactic; the gateway owns semantic checks such as Luhn
//! or expiry in the future.

use crate::domain::field::Field;
use crate::error::ValidationError;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

static TRANSACTION_ID: LazyLock<Regex> = LazyLock::new(|| anchored(r"[0-9]+"));
static ADDRESS: LazyLock<Regex> = LazyLock::new(|| anchored(r"(?-u:[\w. ]{1,60})"));
static ZIP: LazyLock<Regex> = LazyLock::new(|| anchored(r"[0-9]{5}|[0-9]{9}"));
static CARD_NUM: LazyLock<Regex> = LazyLock::new(|| anchored(r"[0-9]{13,16}"));
static CARD_NUM_OR_LAST_FOUR: LazyLock<Regex> =
    LazyLock::new(|| anchored(r"[0-9]{4}|[0-9]{13,16}"));
static CARD_CODE: LazyLock<Regex> = LazyLock::new(|| anchored(r"[0-9]{3,4}"));
static EXP_DATE: LazyLock<Regex> =
    LazyLock::new(|| anchored(r"[01][0-9][-/]?[0-9]{2}|[01][0-9][-/]?20[0-9]{2}"));

fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{pattern})$")).expect("field patterns are valid regexes")
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn check(
    field: Field,
    value: Option<&str>,
    pattern: &Regex,
    expected: &'static str,
) -> Result<String, ValidationError> {
    let value = present(value).ok_or_else(|| ValidationError::required(field))?;
    if pattern.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(ValidationError::invalid(field, value, expected))
    }
}

/// An existing gateway transaction id: digits only.
pub fn transaction_id(value: Option<&str>) -> Result<String, ValidationError> {
    check(
        Field::TransactionId,
        value,
        &TRANSACTION_ID,
        "one or more digits",
    )
}

pub fn address(value: Option<&str>) -> Result<String, ValidationError> {
    check(
        Field::Address,
        value,
        &ADDRESS,
        "1 to 60 letters, digits, '_', '.' or spaces",
    )
}

pub fn zip(value: Option<&str>) -> Result<String, ValidationError> {
    check(Field::Zip, value, &ZIP, "exactly 5 or 9 digits")
}

/// A full card number of 13 to 16 digits.
pub fn card_num(value: Option<&str>) -> Result<String, ValidationError> {
    check(Field::CardNum, value, &CARD_NUM, "13 to 16 digits")
}

/// A full card number, or only its last four digits.
pub fn card_num_or_last_four(value: Option<&str>) -> Result<String, ValidationError> {
    check(
        Field::CardNum,
        value,
        &CARD_NUM_OR_LAST_FOUR,
        "4 digits or 13 to 16 digits",
    )
}

pub fn card_code(value: Option<&str>) -> Result<String, ValidationError> {
    check(Field::CardCode, value, &CARD_CODE, "3 or 4 digits")
}

/// Accepts MMYY, MMYYYY, MM/YY, MM/YYYY, MM-YY and MM-YYYY, returned as given.
pub fn exp_date(value: Option<&str>) -> Result<String, ValidationError> {
    check(
        Field::ExpDate,
        value,
        &EXP_DATE,
        "MMYY, MMYYYY, MM/YY, MM/YYYY, MM-YY or MM-YYYY",
    )
}

/// Anything that parses as a finite decimal number. The original text is kept.
///
/// Values beyond `Decimal`'s 28-digit range are still accepted when they
/// parse as a finite `f64`. Digit separators (`1_000`) are not numbers.
pub fn amount(value: Option<&str>) -> Result<String, ValidationError> {
    let raw = present(value).ok_or_else(|| ValidationError::required(Field::Amount))?;
    let trimmed = raw.trim();
    let parses = !trimmed.contains('_')
        && (Decimal::from_str(trimmed).is_ok()
            || Decimal::from_scientific(trimmed).is_ok()
            || trimmed.parse::<f64>().is_ok_and(f64::is_finite));
    if parses {
        Ok(raw.to_string())
    } else {
        Err(ValidationError::invalid(Field::Amount, raw, "a decimal number"))
    }
}
