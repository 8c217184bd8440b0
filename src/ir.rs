// Strongly-typed class model handed to the renderer. No serde_json::Value here.
use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,                  // the root of one conversion
    Nested,                  // owned by the root
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    Integer,
    Float,                   // double precision
    String,
    Boolean,
    Object,                  // null, or the element of an empty array
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    Primitive(Primitive),
    Class(String),           // name of a class in the owning root's inner list
    List(Box<TypeRef>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescription {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescription {
    pub visibility: Visibility,
    pub name: String,
    pub fields: Vec<FieldDescription>,   // key processing order
    /// Name of the owning class. `None` for the root.
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub inner_classes: Vec<ClassDescription>,
    /// Reserved for renderers; inference never fills it.
    #[serde(default)]
    pub static_inner_classes: Vec<ClassDescription>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl TypeRef {
    pub fn list_of(item: TypeRef) -> Self {
        TypeRef::List(Box::new(item))
    }
    pub fn is_list(&self) -> bool {
        matches!(self, TypeRef::List(_))
    }
}

impl From<Primitive> for TypeRef {
    fn from(p: Primitive) -> Self { TypeRef::Primitive(p) }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Primitive::Integer => "Integer",
            Primitive::Float => "Float",
            Primitive::String => "String",
            Primitive::Boolean => "Boolean",
            Primitive::Object => "Object",
        };
        f.write_str(s)
    }
}

/// Target-language spelling, e.g. `List<Child>`.
impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Primitive(p) => write!(f, "{p}"),
            TypeRef::Class(name) => f.write_str(name),
            TypeRef::List(item) => write!(f, "List<{item}>"),
        }
    }
}

impl Annotation {
    pub const JSON_PROPERTY: &'static str = "JsonProperty";

    pub fn json_property(original_key: &str) -> Self {
        Self { name: Self::JSON_PROPERTY.to_string(), value: original_key.to_string() }
    }
}

impl ClassDescription {
    pub fn new_public(name: impl Into<String>) -> Self {
        Self {
            visibility: Visibility::Public,
            name: name.into(),
            fields: Vec::new(),
            parent: None,
            inner_classes: Vec::new(),
            static_inner_classes: Vec::new(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescription> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn inner_class(&self, name: &str) -> Option<&ClassDescription> {
        self.inner_classes.iter().find(|c| c.name == name)
    }

    /// True if any field in this class or any class it owns is a list.
    pub fn uses_list(&self) -> bool {
        self.fields.iter().any(|f| f.ty.is_list())
            || self.inner_classes.iter().any(ClassDescription::uses_list)
            || self.static_inner_classes.iter().any(ClassDescription::uses_list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_ref_display_uses_target_spelling() {
        let t = TypeRef::list_of(TypeRef::Class("Child".into()));
        assert_eq!(t.to_string(), "List<Child>");
        assert_eq!(TypeRef::from(Primitive::Float).to_string(), "Float");
        assert_eq!(TypeRef::list_of(Primitive::Object.into()).to_string(), "List<Object>");
    }

    #[test]
    fn uses_list_walks_inner_classes() {
        let mut root = ClassDescription::new_public("Root");
        root.fields.push(FieldDescription {
            name: "id".into(),
            ty: Primitive::Integer.into(),
            annotations: vec![],
        });
        assert!(!root.uses_list());

        let mut inner = ClassDescription::new_public("Inner");
        inner.visibility = Visibility::Nested;
        inner.fields.push(FieldDescription {
            name: "tags".into(),
            ty: TypeRef::list_of(Primitive::String.into()),
            annotations: vec![],
        });
        root.inner_classes.push(inner);
        assert!(root.uses_list());
    }

    #[test]
    fn serialized_shape_is_stable() {
        let field = FieldDescription {
            name: "name".into(),
            ty: Primitive::String.into(),
            annotations: vec![Annotation::json_property("Name")],
        };
        let v = serde_json::to_value(&field).unwrap();
        assert_eq!(v, serde_json::json!({
            "name": "name",
            "type": { "primitive": "string" },
            "annotations": [{ "name": "JsonProperty", "value": "Name" }]
        }));
    }
}
