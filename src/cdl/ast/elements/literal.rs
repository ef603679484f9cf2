//! Literal element
//!
//! The `true`, `false`, and `null` leaves. A freshly allocated literal is
//! `null` until the parser classifies the lexeme it scanned.

use super::super::info::{NodeInfo, SourceBuffer};
use super::super::span::Span;
use super::super::traits::Node;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Bool(bool),
    Null,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub info: NodeInfo,
    kind: LiteralKind,
}

impl Literal {
    pub fn allocate(buffer: SourceBuffer) -> Self {
        Self {
            info: NodeInfo::new(buffer),
            kind: LiteralKind::Null,
        }
    }

    pub fn set_kind(&mut self, kind: LiteralKind) {
        self.kind = kind;
    }

    pub fn kind(&self) -> LiteralKind {
        self.kind
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.kind {
            LiteralKind::Bool(value) => Some(value),
            LiteralKind::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        self.kind == LiteralKind::Null
    }

    pub(crate) fn write_value_json(&self, out: &mut String) {
        out.push_str(match self.kind {
            LiteralKind::Bool(true) => "true",
            LiteralKind::Bool(false) => "false",
            LiteralKind::Null => "null",
        });
    }
}

impl Node for Literal {
    fn node_type(&self) -> &'static str {
        match self.kind {
            LiteralKind::Bool(_) => "boolean",
            LiteralKind::Null => "null",
        }
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

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_value_json(&mut out);
        write!(f, "{}", out)
    }
}
