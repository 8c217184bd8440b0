use serde_json::Value;
use tracing::trace;

use super::{classify, pointer_push, Scope};
use crate::error::{Error, Result};
use crate::ir::{Primitive, TypeRef};

/// Type of an array-valued field: `List<T>` where `T` comes from element 0.
///
/// Later elements are not checked against the first; a mixed array takes
/// whatever its head says. Any nested array anywhere in `xs` is rejected.
pub(super) fn infer_array(
    key: &str,
    xs: &[Value],
    scope: &mut Scope,
    path: &str,
) -> Result<TypeRef> {
    if xs.iter().any(Value::is_array) {
        return Err(Error::UnsupportedShape { path: path.to_string() });
    }

    let Some(head) = xs.first() else {
        trace!(path, "empty array, element type unknown");
        return Ok(TypeRef::list_of(Primitive::Object.into()));
    };

    let item = classify(key, head, scope, &pointer_push(path, "0"))?;
    Ok(TypeRef::list_of(item))
}
