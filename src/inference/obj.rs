use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::{classify, pointer_push, Scope};
use crate::error::Result;
use crate::ir::{Annotation, ClassDescription, FieldDescription};
use crate::naming;

/// Build one class from one JSON object. Nested classes go to `scope`, not
/// to the returned class.
pub(super) fn infer_object(
    name: &str,
    map: &Map<String, Value>,
    scope: &mut Scope,
    path: &str,
) -> Result<ClassDescription> {
    let mut class = ClassDescription::new_public(name);

    for (key, value) in map {
        let mut annotations = Vec::new();
        if naming::needs_naming_annotation(key) {
            scope.needs_naming_annotation = true;
            annotations.push(Annotation::json_property(key));
        }

        let ty = classify(key, value, scope, &pointer_push(path, key))?;
        let field_name = naming::lower_first(key);
        trace!(class = name, field = %field_name, ty = %ty, "field");

        class.fields.push(FieldDescription { name: field_name, ty, annotations });
    }

    Ok(class)
}

/// Synthesize the class for an object-valued key and hand it to the scope.
/// Returns the class name to reference from the field.
pub(super) fn infer_nested(
    key: &str,
    map: &Map<String, Value>,
    scope: &mut Scope,
    path: &str,
) -> Result<String> {
    let class_name = naming::upper_first(key);
    let nested = infer_object(&class_name, map, scope, path)?;
    debug!(class = %class_name, fields = nested.fields.len(), path, "synthesized nested class");
    scope.adopt(nested);
    Ok(class_name)
}
