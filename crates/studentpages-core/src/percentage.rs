//! Solved-percentage values.
//!
//! The dataset stores `percentage_of_questions_solved` either as a JSON number
//! (a fraction, `0.55`) or as text (`"55%"`). Both are reduced to a fraction and
//! a cell passes when `fraction * 100 >= 50`, the same rule the report page
//! script applies in the browser.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Pass threshold, in percent.
pub const PASS_THRESHOLD: f64 = 50.0;

/// A raw `percentage_of_questions_solved` value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(pub Value);

impl Percentage {
    /// Derived fraction. Numbers are used as-is; anything else is read as
    /// text with its first `%` removed, taking the longest leading decimal
    /// prefix. Unparseable values count as 0.
    pub fn fraction(&self) -> f64 {
        match &self.0 {
            Value::Number(n) => n.as_f64().unwrap_or(0.0),
            Value::String(s) => parse_float_prefix(&s.replacen('%', "", 1)),
            _ => 0.0,
        }
    }

    pub fn passes(&self) -> bool {
        self.fraction() * 100.0 >= PASS_THRESHOLD
    }
}

impl From<f64> for Percentage {
    fn from(value: f64) -> Self {
        Percentage(Value::from(value))
    }
}

impl From<&str> for Percentage {
    fn from(value: &str) -> Self {
        Percentage(Value::from(value))
    }
}

/// Parse the longest leading float of `s`, `parseFloat` style. Returns 0 when
/// nothing parses or the result is NaN.
fn parse_float_prefix(s: &str) -> f64 {
    let s = s.trim_start();
    let candidate: &str = {
        let end = s
            .char_indices()
            .find(|(_, c)| !matches!(c, '0'..='9' | '.' | '+' | '-' | 'e' | 'E'))
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        &s[..end]
    };

    (1..=candidate.len())
        .rev()
        .find_map(|end| candidate[..end].parse::<f64>().ok())
        .filter(|v| !v.is_nan())
        .unwrap_or(0.0)
}
