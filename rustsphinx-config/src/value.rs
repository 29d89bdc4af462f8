//! Typed option values
//!
//! Every option carries exactly one value of a fixed kind. The kind is
//! decided when the option is first defined (by a typed setter, the defaults
//! table, or a file load) and never changes afterwards; accessors under any
//! other kind fail instead of coercing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The scalar type of an option, fixed at definition time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArgKind {
    Float,
    Int,
    String,
    Boolean,
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArgKind::Float => "float",
            ArgKind::Int => "int",
            ArgKind::String => "string",
            ArgKind::Boolean => "boolean",
        };
        write!(f, "{}", name)
    }
}

/// A single option value, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum ArgValue {
    Float(f64),
    Int(i64),
    String(String),
    Boolean(bool),
}

impl ArgValue {
    /// The kind this value was defined with.
    pub fn kind(&self) -> ArgKind {
        match self {
            ArgValue::Float(_) => ArgKind::Float,
            ArgValue::Int(_) => ArgKind::Int,
            ArgValue::String(_) => ArgKind::String,
            ArgValue::Boolean(_) => ArgKind::Boolean,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            ArgValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ArgValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            ArgValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Infer a value from a configuration-file literal.
    ///
    /// Inference order: integer literal, then decimal/exponent literal, then
    /// the boolean words `yes`/`no`/`true`/`false` (case-insensitive),
    /// otherwise a string. Words like `nan` or `inf` deliberately stay
    /// strings; only literals that look numeric become numbers.
    pub fn from_literal(literal: &str) -> ArgValue {
        if let Ok(v) = literal.parse::<i64>() {
            return ArgValue::Int(v);
        }
        if looks_numeric(literal) {
            if let Ok(v) = literal.parse::<f64>() {
                return ArgValue::Float(v);
            }
        }
        match parse_boolean_word(literal) {
            Some(v) => ArgValue::Boolean(v),
            None => ArgValue::String(literal.to_string()),
        }
    }

    /// Parse a literal under an already-declared kind.
    ///
    /// Used for the defaults table, where `-samprate`'s literal `16000` must
    /// still come out a float because that is its declared kind.
    pub fn parse_as(kind: ArgKind, literal: &str) -> Option<ArgValue> {
        match kind {
            ArgKind::Float => literal.parse::<f64>().ok().map(ArgValue::Float),
            ArgKind::Int => literal.parse::<i64>().ok().map(ArgValue::Int),
            ArgKind::String => Some(ArgValue::String(literal.to_string())),
            ArgKind::Boolean => parse_boolean_word(literal).map(ArgValue::Boolean),
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Float(v) => write!(f, "{}", v),
            ArgValue::Int(v) => write!(f, "{}", v),
            ArgValue::String(v) => write!(f, "{}", v),
            // Sphinx convention for boolean option values
            ArgValue::Boolean(true) => write!(f, "yes"),
            ArgValue::Boolean(false) => write!(f, "no"),
        }
    }
}

fn parse_boolean_word(literal: &str) -> Option<bool> {
    if literal.eq_ignore_ascii_case("yes") || literal.eq_ignore_ascii_case("true") {
        Some(true)
    } else if literal.eq_ignore_ascii_case("no") || literal.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Does the literal look like a number at all?
///
/// Guards float parsing so that `nan`, `inf`, and arbitrary words fall
/// through to string inference.
fn looks_numeric(literal: &str) -> bool {
    let mut chars = literal.chars();
    let leading_ok = matches!(chars.next(), Some(c) if c.is_ascii_digit() || c == '+' || c == '-' || c == '.');
    leading_ok && literal.chars().any(|c| c.is_ascii_digit())
}
