use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Recognized action extra keys
pub mod keys {
    pub const AMOUNT: &str = "amount";
    /// Nested-style key some assistant versions send instead of `amount`
    pub const EXPENSE_AMOUNT: &str = "expense.amount";
    pub const TITLE: &str = "title";
    pub const TRIP_NAME: &str = "tripName";
    pub const PAYER_NAME: &str = "payerName";
    pub const PARTICIPANT_NAMES: &str = "participantNames";
    pub const EXPENSE_PARTICIPANTS: &str = "expense.participants";
}

/// A single loosely-typed value from an action payload.
///
/// Producers are untrusted, so anything that is not a number, text or list
/// lands in `Other` and every coercion treats it as "no value".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Extra {
    Number(f64),
    Text(String),
    List(Vec<Extra>),
    Other(Value),
}

/// Action payload keyed by extra name
pub type Extras = BTreeMap<String, Extra>;

impl Extra {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Extra::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Native numbers pass through, text is parsed.
    pub fn as_amount(&self) -> Option<f64> {
        match self {
            Extra::Number(number) if number.is_finite() => Some(*number),
            Extra::Text(text) => parse_number(text),
            _ => None,
        }
    }
}

impl From<f64> for Extra {
    fn from(value: f64) -> Self {
        Extra::Number(value)
    }
}

impl From<f32> for Extra {
    fn from(value: f32) -> Self {
        Extra::Number(f64::from(value))
    }
}

impl From<i32> for Extra {
    fn from(value: i32) -> Self {
        Extra::Number(f64::from(value))
    }
}

impl From<i64> for Extra {
    fn from(value: i64) -> Self {
        Extra::Number(value as f64)
    }
}

impl From<String> for Extra {
    fn from(value: String) -> Self {
        Extra::Text(value)
    }
}

impl From<&str> for Extra {
    fn from(value: &str) -> Self {
        Extra::Text(value.to_string())
    }
}

impl<T: Into<Extra>> From<Vec<T>> for Extra {
    fn from(values: Vec<T>) -> Self {
        Extra::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<Value> for Extra {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(number) => match number.as_f64() {
                Some(number) => Extra::Number(number),
                None => Extra::Other(Value::Number(number)),
            },
            Value::String(text) => Extra::Text(text),
            Value::Array(items) => Extra::List(items.into_iter().map(Extra::from).collect()),
            other => Extra::Other(other),
        }
    }
}

/// Surrounding whitespace is tolerated; `NaN` and infinities are not amounts.
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

/// `amount` wins whenever it is present, even if it does not coerce. The
/// nested key is only read as text.
pub fn extract_amount(extras: &Extras) -> Option<f64> {
    if let Some(value) = extras.get(keys::AMOUNT) {
        return value.as_amount();
    }

    extras
        .get(keys::EXPENSE_AMOUNT)
        .and_then(Extra::as_text)
        .and_then(parse_number)
}

pub fn extract_text(extras: &Extras, key: &str) -> Option<String> {
    extras.get(key).and_then(Extra::as_text).map(str::to_string)
}

/// Comma-separated text is split and trimmed; lists keep their text
/// elements. Blank names are dropped either way.
pub fn extract_participant_names(extras: &Extras) -> Option<Vec<String>> {
    let value = extras
        .get(keys::PARTICIPANT_NAMES)
        .or_else(|| extras.get(keys::EXPENSE_PARTICIPANTS))?;

    match value {
        Extra::Text(text) => Some(split_names(text)),
        Extra::List(items) => Some(
            items
                .iter()
                .filter_map(Extra::as_text)
                .filter(|name| !name.trim().is_empty())
                .map(str::to_string)
                .collect(),
        ),
        _ => None,
    }
}

fn split_names(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
