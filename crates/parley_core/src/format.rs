use serde_json::Value;

pub const JSON_LANGUAGE: &str = "json";

/// Pretty-print JSON code with 2-space indentation.
///
/// Any other language, or JSON that does not parse, comes back unchanged.
pub fn format_code(code: &str, language: &str) -> String {
    if language != JSON_LANGUAGE {
        return code.to_string();
    }
    serde_json::from_str::<Value>(code)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_is_pretty_printed() {
        assert_eq!(format_code(r#"{"a":1}"#, "json"), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_nested_json_and_key_order() {
        let formatted = format_code(r#"{"b":[1,2],"a":{"c":null}}"#, "json");
        assert_eq!(
            formatted,
            "{\n  \"b\": [\n    1,\n    2\n  ],\n  \"a\": {\n    \"c\": null\n  }\n}"
        );
    }

    #[test]
    fn test_invalid_json_unchanged() {
        let code = "{\"a\": 1,";
        assert_eq!(format_code(code, "json"), code);
    }

    #[test]
    fn test_other_language_unchanged() {
        assert_eq!(format_code(r#"{"a":1}"#, "javascript"), r#"{"a":1}"#);
        assert_eq!(format_code("x = 1", ""), "x = 1");
    }
}
