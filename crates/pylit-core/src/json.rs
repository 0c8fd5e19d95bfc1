//! Interchange converter — value tree into a `serde_json::Value` node tree.
//!
//! One of the two stateless visitors over [`Value`]. The structural mapping:
//!
//! - scalars become JSON null/bool/number/string nodes (non-finite floats
//!   have no JSON spelling and become null);
//! - `List`, `Tuple`, and `Set` all become array nodes in parse order, so
//!   list and tuple are indistinguishable here and sets are neither sorted
//!   nor deduplicated;
//! - `Dict` becomes an object node; each key node is converted and then
//!   stringified — string keys verbatim, everything else as its compact
//!   JSON text. JSON has no duplicate-key concept, so colliding textual
//!   keys overwrite in insertion order.
//!
//! The crate is built with serde_json's `preserve_order` feature: object
//! maps keep insertion order, and re-inserting a key keeps its original
//! position while replacing the value, which is exactly the documented
//! collision behavior.

use crate::error::Result;
use crate::value::{Scalar, Value, Visitor};
use serde_json::{Map, Number, Value as Json};

/// Visitor producing the interchange node tree. Stateless; one instance
/// per conversion call.
pub struct JsonConverter;

impl Visitor for JsonConverter {
    type Output = Json;

    fn visit_scalar(&mut self, scalar: &Scalar) -> Json {
        match scalar {
            Scalar::None => Json::Null,
            Scalar::Bool(b) => Json::Bool(*b),
            Scalar::Int(n) => Json::Number(Number::from(*n)),
            Scalar::Float(x) => Number::from_f64(*x).map_or(Json::Null, Json::Number),
            Scalar::Str(s) => Json::String(s.clone()),
        }
    }

    fn visit_list(&mut self, items: &[Value]) -> Json {
        self.array(items)
    }

    fn visit_tuple(&mut self, items: &[Value]) -> Json {
        self.array(items)
    }

    fn visit_set(&mut self, items: &[Value]) -> Json {
        self.array(items)
    }

    fn visit_dict(&mut self, entries: &[(Value, Value)]) -> Json {
        let mut map = Map::new();
        for (key, value) in entries {
            let key_text = key_to_string(&key.accept(self));
            let value_node = value.accept(self);
            map.insert(key_text, value_node);
        }
        Json::Object(map)
    }
}

impl JsonConverter {
    fn array(&mut self, items: &[Value]) -> Json {
        Json::Array(items.iter().map(|item| item.accept(self)).collect())
    }
}

/// Object keys must be text: string nodes are used verbatim, all other
/// converted key nodes are rendered as their compact JSON form.
fn key_to_string(node: &Json) -> String {
    match node {
        Json::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Convert a parsed tree into an interchange node tree.
pub fn to_json_value(value: &Value) -> Json {
    value.accept(&mut JsonConverter)
}

/// Run the whole pipeline: literal text in, compact JSON text out — no
/// inserted whitespace, keys and string values quoted.
///
/// # Examples
///
/// ```
/// use pylit_core::to_json;
///
/// assert_eq!(to_json("{'a': 1, 'b': 2}").unwrap(), r#"{"a":1,"b":2}"#);
/// assert_eq!(to_json("(1,)").unwrap(), "[1]");
/// ```
pub fn to_json(input: &str) -> Result<String> {
    let tree = crate::parse(input)?;
    Ok(serde_json::to_string(&to_json_value(&tree))?)
}
