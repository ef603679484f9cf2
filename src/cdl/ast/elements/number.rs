//! Number element
//!
//! Numbers carry the parsed `f64` once the parser has set it; before that,
//! the value is derived from the span's source text on demand. Integral
//! values serialize without a fractional part.

use super::super::info::{NodeInfo, SourceBuffer};
use super::super::json::format_number;
use super::super::span::Span;
use super::super::traits::Node;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Number {
    pub info: NodeInfo,
    value: Option<f64>,
}

impl Number {
    pub fn allocate(buffer: SourceBuffer) -> Self {
        Self {
            info: NodeInfo::new(buffer),
            value: None,
        }
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = Some(value);
    }

    /// The numeric value; parsed from the span's content when not set
    /// explicitly, NaN when neither is available.
    pub fn value(&self) -> f64 {
        match self.value {
            Some(value) => value,
            None => self.info.content().parse().unwrap_or(f64::NAN),
        }
    }

    /// The value as an integer, if it is integral.
    pub fn as_i64(&self) -> Option<i64> {
        let value = self.value();
        if value.is_finite() && value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
            Some(value as i64)
        } else {
            None
        }
    }

    pub(crate) fn write_value_json(&self, out: &mut String) {
        out.push_str(&format_number(self.value()));
    }
}

impl Node for Number {
    fn node_type(&self) -> &'static str {
        "number"
    }

    fn debug_name(&self) -> &str {
        self.info.debug_name()
    }

    fn span(&self) -> Option<Span> {
        self.info.span()
    }

    fn to_json(&self) -> String {
        let mut out = String::from(self.debug_name());
        self.write_value_json(&mut out);
        out
    }

    fn to_formatted_json(&self, _indent: usize) -> String {
        self.to_json()
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_number(self.value()))
    }
}
