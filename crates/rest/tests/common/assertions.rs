//! HTTP response assertions.
//!
//! Provides assertion utilities for testing HTTP responses.

use axum_test::TestResponse;
use serde_json::Value;

/// Asserts that the response has the expected status code.
pub fn assert_status(response: &TestResponse, expected: u16) {
    let actual = response.status_code().as_u16();
    assert_eq!(
        actual, expected,
        "Expected status {}, got {}",
        expected, actual
    );
}

/// Asserts that the response declares a JSON content type.
pub fn assert_json_content_type(response: &TestResponse) {
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        content_type.starts_with("application/json"),
        "Expected JSON content type, got '{}'",
        content_type
    );
}

/// Asserts that the response carries no body.
pub fn assert_no_body(response: &TestResponse) {
    let body = response.text();
    assert!(
        body.is_empty(),
        "Expected empty body, got {} bytes: {}",
        body.len(),
        body
    );
}

/// Asserts that a JSON object carries every named field.
pub fn assert_has_fields(body: &Value, fields: &[&str]) {
    for field in fields {
        assert!(
            body.get(field).is_some(),
            "Expected field '{}' in {}",
            field,
            body
        );
    }
}

/// Asserts that a JSON object carries exactly the named fields, no others.
pub fn assert_exact_fields(body: &Value, fields: &[&str]) {
    assert_has_fields(body, fields);

    let object = body.as_object().expect("Expected a JSON object");
    for key in object.keys() {
        assert!(
            fields.contains(&key.as_str()),
            "Unexpected field '{}' in {}",
            key,
            body
        );
    }
}

/// Gets a value from a JSON object using a simple path notation.
///
/// Supports:
/// - `field` - Direct field access
/// - `field.nested` - Nested field access
/// - `field[0]` - Array index access
pub fn json_path_get<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;

    for part in path.split('.') {
        // Check for array index
        if let Some(bracket_pos) = part.find('[') {
            let field_name = &part[..bracket_pos];
            let index_str = &part[bracket_pos + 1..part.len() - 1];

            // Get the field
            current = current.get(field_name)?;

            // Get the array index
            let index: usize = index_str.parse().ok()?;
            current = current.get(index)?;
        } else {
            current = current.get(part)?;
        }
    }

    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_path_simple() {
        let value = json!({"title": "Notes"});
        assert_eq!(json_path_get(&value, "title"), Some(&json!("Notes")));
    }

    #[test]
    fn test_json_path_nested() {
        let value = json!({"author": {"firstName": "Ada"}});
        assert_eq!(
            json_path_get(&value, "author.firstName"),
            Some(&json!("Ada"))
        );
    }

    #[test]
    fn test_json_path_array() {
        let value = json!({"blogPosts": [{"id": "a"}, {"id": "b"}]});
        assert_eq!(
            json_path_get(&value, "blogPosts[1].id"),
            Some(&json!("b"))
        );
    }

    #[test]
    fn test_assert_exact_fields_accepts_match() {
        let value = json!({"id": "1", "title": "T"});
        assert_exact_fields(&value, &["id", "title"]);
    }

    #[test]
    #[should_panic(expected = "Unexpected field")]
    fn test_assert_exact_fields_rejects_extras() {
        let value = json!({"id": "1", "title": "T", "stray": true});
        assert_exact_fields(&value, &["id", "title"]);
    }
}
