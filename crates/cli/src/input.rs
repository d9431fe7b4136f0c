//! Conversions from external values into `Operand`s.
//!
//! - argv words and CSV text cells carry no type: text that parses as `f64`
//!   becomes a number, blank text is missing, anything else stays text.
//! - JSON is typed: a JSON string is text even when it looks like a number.

use geocalc::{Operand, ShapeRecord};
use polars::prelude::AnyValue;
use serde_json::Value;

pub fn operand_from_word(word: &str) -> Operand {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        return Operand::Missing;
    }
    match trimmed.parse::<f64>() {
        Ok(x) => Operand::Number(x),
        Err(_) => Operand::Text(word.to_string()),
    }
}

pub fn record_from_words(kind: &str, words: &[String]) -> ShapeRecord {
    ShapeRecord::new(kind, words.iter().map(|w| operand_from_word(w)).collect())
}

pub fn operand_from_json(value: &Value) -> Operand {
    match value {
        Value::Number(n) => n
            .as_f64()
            .map_or_else(|| Operand::Text(n.to_string()), Operand::Number),
        Value::String(s) => Operand::Text(s.clone()),
        Value::Bool(b) => Operand::Bool(*b),
        Value::Null => Operand::Missing,
        other => Operand::Text(other.to_string()),
    }
}

pub fn operand_from_cell(cell: AnyValue<'_>) -> Operand {
    match cell {
        AnyValue::Null => Operand::Missing,
        AnyValue::Boolean(b) => Operand::Bool(b),
        AnyValue::Float64(x) => Operand::Number(x),
        AnyValue::Float32(x) => Operand::Number(f64::from(x)),
        AnyValue::Int64(x) => Operand::Number(x as f64),
        AnyValue::Int32(x) => Operand::Number(f64::from(x)),
        AnyValue::UInt64(x) => Operand::Number(x as f64),
        AnyValue::UInt32(x) => Operand::Number(f64::from(x)),
        AnyValue::String(s) => operand_from_word(s),
        other => Operand::Text(other.to_string()),
    }
}
