//! The value tree — tagged union shared by parser output and converter
//! input.
//!
//! Nodes own their children exclusively; the grammar builds strictly
//! bottom-up over a finite token stream, so sharing and cycles are
//! unconstructible. A tree is built once by the parser, handed whole to one
//! visitor, and discarded.
//!
//! The only behavior on [`Value`] besides the [`Visitor`] dispatch hook is
//! a `Display` impl that renders the tree back in source syntax, which is
//! what makes the parse ↔ render round-trip testable.

use std::fmt;

/// A leaf value. Integers and floats are kept distinct; `None` is the
/// absent value, not a container emptiness marker.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// One node of a parsed literal tree.
///
/// `List` and `Tuple` differ only by source provenance (brackets vs.
/// parentheses), not capability. `Set` keeps parse order and performs no
/// deduplication. `Dict` keeps key-value pairs in parse order and permits
/// duplicate keys at the tree level; converters collapse textual key
/// collisions last-write-wins.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Set(Vec<Value>),
    Dict(Vec<(Value, Value)>),
}

/// The converter capability set. A new target representation is a new
/// implementation of this trait; the tree itself never changes.
pub trait Visitor {
    type Output;

    fn visit_scalar(&mut self, scalar: &Scalar) -> Self::Output;
    fn visit_list(&mut self, items: &[Value]) -> Self::Output;
    fn visit_tuple(&mut self, items: &[Value]) -> Self::Output;
    fn visit_set(&mut self, items: &[Value]) -> Self::Output;
    fn visit_dict(&mut self, entries: &[(Value, Value)]) -> Self::Output;
}

impl Value {
    /// Dispatch this node to the visitor arm matching its variant. The
    /// match is exhaustive, so adding a variant breaks every converter at
    /// compile time instead of at run time.
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Value::Scalar(scalar) => visitor.visit_scalar(scalar),
            Value::List(items) => visitor.visit_list(items),
            Value::Tuple(items) => visitor.visit_tuple(items),
            Value::Set(items) => visitor.visit_set(items),
            Value::Dict(entries) => visitor.visit_dict(entries),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::None => f.write_str("None"),
            Scalar::Bool(true) => f.write_str("True"),
            Scalar::Bool(false) => f.write_str("False"),
            Scalar::Int(n) => write!(f, "{n}"),
            // `{:?}` keeps a fractional part ("3.0"), so the rendered
            // lexeme re-scans as a float rather than an integer.
            Scalar::Float(x) => write!(f, "{x:?}"),
            Scalar::Str(s) => {
                f.write_str("'")?;
                for ch in s.chars() {
                    match ch {
                        '\\' => f.write_str("\\\\")?,
                        '\'' => f.write_str("\\'")?,
                        '\n' => f.write_str("\\n")?,
                        '\r' => f.write_str("\\r")?,
                        '\t' => f.write_str("\\t")?,
                        other => write!(f, "{other}")?,
                    }
                }
                f.write_str("'")
            }
        }
    }
}

/// Renders source syntax: `[..]`, `(..)`, `{..}` with `, ` separators.
/// An empty `Set` renders as `{}`, which re-parses as an empty `Dict` —
/// that is the one tree shape with no faithful source form.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(scalar) => write!(f, "{scalar}"),
            Value::List(items) => write_sequence(f, items, "[", "]"),
            Value::Tuple(items) => write_sequence(f, items, "(", ")"),
            Value::Set(items) => write_sequence(f, items, "{", "}"),
            Value::Dict(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

fn write_sequence(
    f: &mut fmt::Formatter<'_>,
    items: &[Value],
    open: &str,
    close: &str,
) -> fmt::Result {
    f.write_str(open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str(close)
}
