//! Native converter — value tree directly into host-native values.
//!
//! The second visitor. It performs the same structural mapping as the
//! interchange converter but skips the `serde_json` node tree entirely:
//! scalars become [`Native`] scalars, the three sequence containers become
//! `Native::Seq`, and mappings become an insertion-ordered pair list with
//! textual keys and last-write-wins collision handling.
//!
//! For every representable value the result is equivalent to serializing
//! the interchange converter's output and re-parsing it; `Native`'s
//! `Display` renders the same compact JSON text, which is how that
//! equivalence is asserted in tests.

use crate::error::Result;
use crate::value::{Scalar, Value, Visitor};
use std::fmt;

/// A host-native value: plain Rust scalars, `Vec` for the ordered
/// sequences, and an insertion-ordered `(key, value)` pair list for the
/// associative form — order is kept without reaching for an extra map
/// crate, and a colliding key keeps its position while taking the later
/// value.
#[derive(Debug, Clone, PartialEq)]
pub enum Native {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Seq(Vec<Native>),
    Map(Vec<(String, Native)>),
}

/// Visitor producing [`Native`] values. Stateless; one instance per
/// conversion call.
pub struct NativeConverter;

impl Visitor for NativeConverter {
    type Output = Native;

    fn visit_scalar(&mut self, scalar: &Scalar) -> Native {
        match scalar {
            Scalar::None => Native::None,
            Scalar::Bool(b) => Native::Bool(*b),
            Scalar::Int(n) => Native::Int(*n),
            Scalar::Float(x) => Native::Float(*x),
            Scalar::Str(s) => Native::Str(s.clone()),
        }
    }

    fn visit_list(&mut self, items: &[Value]) -> Native {
        self.sequence(items)
    }

    fn visit_tuple(&mut self, items: &[Value]) -> Native {
        self.sequence(items)
    }

    fn visit_set(&mut self, items: &[Value]) -> Native {
        self.sequence(items)
    }

    fn visit_dict(&mut self, entries: &[(Value, Value)]) -> Native {
        let mut pairs: Vec<(String, Native)> = Vec::new();
        for (key, value) in entries {
            let key_text = key_to_string(&key.accept(self));
            let converted = value.accept(self);
            match pairs.iter_mut().find(|entry| entry.0 == key_text) {
                Some(entry) => entry.1 = converted,
                None => pairs.push((key_text, converted)),
            }
        }
        Native::Map(pairs)
    }
}

impl NativeConverter {
    fn sequence(&mut self, items: &[Value]) -> Native {
        Native::Seq(items.iter().map(|item| item.accept(self)).collect())
    }
}

/// Same key rule as the interchange converter: string keys verbatim,
/// everything else as its compact JSON text.
fn key_to_string(key: &Native) -> String {
    match key {
        Native::Str(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Renders the compact JSON text of this value, matching what the
/// interchange converter would serialize for the same tree.
impl fmt::Display for Native {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Native::None => f.write_str("null"),
            Native::Bool(b) => write!(f, "{b}"),
            Native::Int(n) => write!(f, "{n}"),
            Native::Float(x) => {
                if !x.is_finite() {
                    // Non-finite floats have no JSON spelling.
                    f.write_str("null")
                } else if x.fract() == 0.0 && x.abs() < 1e16 {
                    // Keep the fractional part the way serde_json does.
                    write!(f, "{x:.1}")
                } else {
                    write!(f, "{x}")
                }
            }
            Native::Str(s) => write_json_string(f, s),
            Native::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Native::Map(pairs) => {
                f.write_str("{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_json_string(f, key)?;
                    write!(f, ":{value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

fn write_json_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for ch in s.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            control if (control as u32) < 0x20 => write!(f, "\\u{:04x}", control as u32)?,
            other => write!(f, "{other}")?,
        }
    }
    f.write_str("\"")
}

/// Run the whole pipeline: literal text in, host-native value out.
///
/// # Examples
///
/// ```
/// use pylit_core::{to_native, Native};
///
/// let value = to_native("[1, 'two', None]").unwrap();
/// assert_eq!(
///     value,
///     Native::Seq(vec![
///         Native::Int(1),
///         Native::Str("two".to_string()),
///         Native::None,
///     ])
/// );
/// ```
pub fn to_native(input: &str) -> Result<Native> {
    let tree = crate::parse(input)?;
    Ok(tree.accept(&mut NativeConverter))
}
