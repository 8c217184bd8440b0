//! JSON → class schema inference.
//!
//! One sample document in, one `ClassDescription` tree out. Each object level
//! becomes a class; object-valued keys (and arrays whose head is an object)
//! synthesize a nested class named after the key.
//!
//! Rules:
//! - Keys are visited in document order (`serde_json/preserve_order`), so
//!   field order is stable across runs.
//! - Every nested class, at any depth, is flattened into the *root's*
//!   `inner_classes`, appended after the classes nested inside it.
//! - Arrays are typed from element 0 only; arrays of arrays are rejected.
//! - All mutable state lives in a per-call `Scope`, so conversions are
//!   independent and can run in parallel.
pub mod num;
mod arr;
mod obj;

use serde_json::Value;
use tracing::warn;

use crate::error::{Error, Result};
use crate::ir::{ClassDescription, Primitive, TypeRef, Visibility};

pub use num::classify_number;

// ------------------------------ Result ----------------------------------- //

/// Output of one top-level conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Inference {
    pub root: ClassDescription,
    /// Some key needed a `JsonProperty` annotation.
    pub needs_naming_annotation: bool,
}

// ------------------------------ Scope ------------------------------------ //

/// Accumulator threaded through one conversion.
#[derive(Debug)]
pub(crate) struct Scope {
    root_name: String,
    inner: Vec<ClassDescription>,
    needs_naming_annotation: bool,
}

impl Scope {
    fn new(root_name: &str) -> Self {
        Self {
            root_name: root_name.to_string(),
            inner: Vec::new(),
            needs_naming_annotation: false,
        }
    }

    /// Re-parent a freshly built class onto the root.
    fn adopt(&mut self, mut class: ClassDescription) {
        // Same key in two branches; which one a renderer keeps is up to it.
        if self.inner.iter().any(|c| c.name == class.name) {
            warn!(class = %class.name, root = %self.root_name, "duplicate nested class name");
        }
        class.visibility = Visibility::Nested;
        class.parent = Some(self.root_name.clone());
        self.inner.push(class);
    }
}

// ------------------------------ Front API -------------------------------- //

/// Infer the class tree for `json`, naming the root class `name`.
///
/// Fails on a `null` or non-object root and on any array of arrays.
pub fn infer(name: &str, json: &Value) -> Result<Inference> {
    let map = match json {
        Value::Object(map) => map,
        Value::Null => return Err(Error::invalid_input("JSON value must not be null")),
        other => {
            return Err(Error::invalid_input(format!(
                "root JSON value must be an object, found {}",
                kind_of(other)
            )));
        }
    };

    let mut scope = Scope::new(name);
    let mut root = obj::infer_object(name, map, &mut scope, "")?;
    root.inner_classes = scope.inner;

    Ok(Inference { root, needs_naming_annotation: scope.needs_naming_annotation })
}

// ------------------------------ Classify --------------------------------- //

/// Type of a single value found under `key`.
fn classify(key: &str, value: &Value, scope: &mut Scope, path: &str) -> Result<TypeRef> {
    let ty: TypeRef = match value {
        Value::Null => Primitive::Object.into(),
        Value::Bool(_) => Primitive::Boolean.into(),
        Value::Number(n) => num::classify_number(n).into(),
        Value::String(_) => Primitive::String.into(),
        Value::Object(map) => TypeRef::Class(obj::infer_nested(key, map, scope, path)?),
        Value::Array(xs) => arr::infer_array(key, xs, scope, path)?,
    };
    Ok(ty)
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// RFC 6901 escaping, used only for error locations.
fn pointer_push(path: &str, token: &str) -> String {
    format!("{path}/{}", token.replace('~', "~0").replace('/', "~1"))
}

// ------------------------------- Tests ------------------------------------ //
