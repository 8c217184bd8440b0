//! Infer a class hierarchy (fields, types, naming annotations) from one
//! sample JSON document, ready for an object-oriented code renderer.
pub mod inference;
pub mod ir;
pub mod naming;
pub mod descriptor;
pub mod config;
pub mod error;
pub mod cli;
pub mod logging;

pub use descriptor::{FileDescriptor, FileDescriptorBuilder};
pub use error::{Error, Result};
pub use inference::{infer, Inference};
pub use ir::{Annotation, ClassDescription, FieldDescription, Primitive, TypeRef, Visibility};
