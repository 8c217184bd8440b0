//! Identifier casing for fields and synthesized classes.
//!
//! Only the first character is touched; the rest of a key is kept verbatim.

/// `UserName` → `userName`.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// `user` → `User`.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

pub fn is_upper_first(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}

/// A key needs a `JsonProperty` annotation when lower-casing its first
/// letter changes it.
pub fn needs_naming_annotation(key: &str) -> bool {
    is_upper_first(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_letter_only() {
        assert_eq!(lower_first("UserID"), "userID");
        assert_eq!(upper_first("userId"), "UserId");
        assert_eq!(lower_first(""), "");
        assert_eq!(upper_first("_x"), "_x");
        assert_eq!(lower_first("Ärger"), "ärger");
    }

    #[test]
    fn annotation_rule() {
        assert!(needs_naming_annotation("Name"));
        assert!(!needs_naming_annotation("name"));
        assert!(!needs_naming_annotation("1abc"));
        assert!(!needs_naming_annotation(""));
    }
}
