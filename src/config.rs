//! Descriptor settings, loadable from a JSON file.
use std::path::Path;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_PACKAGE: &str = "generated";
pub const DEFAULT_FILE_COMMENT: &str = "/**\n* generated by json2class in $time\n**/";
/// 12-hour clock, no AM/PM marker.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y/%m/%d %I:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub package_name: String,
    /// `$time` is replaced with the formatted timestamp.
    pub file_comment: String,
    /// `chrono` strftime syntax.
    pub timestamp_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package_name: DEFAULT_PACKAGE.to_string(),
            file_comment: DEFAULT_FILE_COMMENT.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl Config {
    pub fn from_json_str(src: &str) -> Result<Self> {
        from_str_with_path(src)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let src = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&src)
    }
}

/// Deserialize with JSON-path context in error messages.
fn from_str_with_path<T: serde::de::DeserializeOwned>(src: &str) -> Result<T> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(|err| Error::Config {
        path: err.path().to_string(),
        message: err.into_inner().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg = Config::from_json_str(r#"{"package_name": "com.acme.model"}"#).unwrap();
        assert_eq!(cfg.package_name, "com.acme.model");
        assert_eq!(cfg.file_comment, DEFAULT_FILE_COMMENT);
        assert_eq!(cfg.timestamp_format, DEFAULT_TIMESTAMP_FORMAT);
    }

    #[test]
    fn errors_carry_the_json_path() {
        let err = Config::from_json_str(r#"{"package_name": 7}"#).unwrap_err();
        match err {
            Error::Config { path, .. } => assert_eq!(path, "package_name"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = Config::from_json_str(r#"{"package_name": "x""#).unwrap_err();
        assert!(matches!(err, Error::Config { .. }), "got {err}");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::from_json_str(r#"{"packge_name": "x"}"#).is_err());
    }
}
