//! File-level wrapper around an inferred class tree: package, imports and
//! the generated-file comment. No inference happens here.
use std::fmt::Write as _;

use chrono::{Local, NaiveDateTime};
use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::inference::Inference;
use crate::ir::ClassDescription;

pub const IMPORT_JSON_PROPERTY: &str = "com.fasterxml.jackson.annotation.JsonProperty";
pub const IMPORT_LIST: &str = "java.util.List";
/// Data-class boilerplate the renderer always needs.
pub const BASE_IMPORTS: [&str; 4] = [
    "lombok.AllArgsConstructor",
    "lombok.Builder",
    "lombok.Data",
    "lombok.NoArgsConstructor",
];

static TIME_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$time").expect("static pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub package_name: String,
    pub imports: Vec<String>,
    pub file_comment: String,
    pub root_class: ClassDescription,
}

#[derive(Debug, Clone, Default)]
pub struct FileDescriptorBuilder {
    config: Config,
}

impl FileDescriptorBuilder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Stamp the comment with the current local time.
    pub fn build(&self, inference: Inference) -> Result<FileDescriptor> {
        self.build_at(inference, Local::now().naive_local())
    }

    pub fn build_at(&self, inference: Inference, at: NaiveDateTime) -> Result<FileDescriptor> {
        let imports = imports_for(&inference);
        let file_comment = self.file_comment(at)?;
        debug!(class = %inference.root.name, imports = imports.len(), "built file descriptor");
        Ok(FileDescriptor {
            package_name: self.config.package_name.clone(),
            imports,
            file_comment,
            root_class: inference.root,
        })
    }

    fn file_comment(&self, at: NaiveDateTime) -> Result<String> {
        // chrono reports a bad format string through fmt::Error.
        let mut stamp = String::new();
        write!(stamp, "{}", at.format(&self.config.timestamp_format)).map_err(|_| Error::Config {
            path: "timestamp_format".to_string(),
            message: format!("invalid format string `{}`", self.config.timestamp_format),
        })?;
        Ok(TIME_PLACEHOLDER.replace_all(&self.config.file_comment, NoExpand(&stamp)).into_owned())
    }
}

/// Annotation import first, then the base set, then `List` if used anywhere.
pub fn imports_for(inference: &Inference) -> Vec<String> {
    let mut imports = IndexSet::<&str>::new();
    if inference.needs_naming_annotation {
        imports.insert(IMPORT_JSON_PROPERTY);
    }
    imports.extend(BASE_IMPORTS);
    if inference.root.uses_list() {
        imports.insert(IMPORT_LIST);
    }
    imports.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(14, 7, 9).unwrap()
    }

    fn describe(doc: serde_json::Value) -> FileDescriptor {
        let inference = crate::inference::infer("Root", &doc).unwrap();
        FileDescriptorBuilder::default().build_at(inference, at()).unwrap()
    }

    #[test]
    fn base_imports_only() {
        let fd = describe(json!({"id": 1, "name": "x"}));
        assert_eq!(fd.package_name, "generated");
        assert_eq!(fd.imports, BASE_IMPORTS.map(String::from).to_vec());
        assert_eq!(fd.root_class.name, "Root");
    }

    #[test]
    fn annotation_and_list_imports() {
        let fd = describe(json!({"Id": 1, "tags": ["a"]}));
        assert_eq!(fd.imports.first().map(String::as_str), Some(IMPORT_JSON_PROPERTY));
        assert_eq!(fd.imports.last().map(String::as_str), Some(IMPORT_LIST));
        assert_eq!(fd.imports.len(), 6);
    }

    #[test]
    fn list_in_nested_class_counts() {
        let fd = describe(json!({"outer": {"inner": {"xs": []}}}));
        assert!(fd.imports.iter().any(|i| i == IMPORT_LIST));
        assert!(!fd.imports.iter().any(|i| i == IMPORT_JSON_PROPERTY));
    }

    #[test]
    fn comment_is_stamped() {
        let fd = describe(json!({"a": 1}));
        assert_eq!(fd.file_comment, "/**\n* generated by json2class in 2024/03/05 02:07:09\n**/");
    }

    #[test]
    fn custom_config_applies() {
        let config = Config {
            package_name: "com.acme".into(),
            file_comment: "// $time $time".into(),
            timestamp_format: "%Y-%m-%d".into(),
        };
        let inference = crate::inference::infer("Root", &json!({})).unwrap();
        let fd = FileDescriptorBuilder::new(config).build_at(inference, at()).unwrap();
        assert_eq!(fd.package_name, "com.acme");
        assert_eq!(fd.file_comment, "// 2024-03-05 2024-03-05");
    }

    #[test]
    fn bad_timestamp_format_is_an_error() {
        let config = Config { timestamp_format: "%Q".into(), ..Config::default() };
        let inference = crate::inference::infer("Root", &json!({})).unwrap();
        let err = FileDescriptorBuilder::new(config).build_at(inference, at()).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
