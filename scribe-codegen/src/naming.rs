//! Case-conversion helpers for generated identifiers.
//!
//! Used by the TypeScript layer for enum key formatting.

/// Convert a string to PascalCase (e.g., "max_retries" -> "MaxRetries").
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-', ' '])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g., "max_retries" -> "maxRetries").
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to CONSTANT_CASE (e.g., "maxRetries" -> "MAX_RETRIES").
pub fn to_constant_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c == '-' || c == ' ' || c == '_' {
            result.push('_');
            continue;
        }
        if c.is_uppercase() && i > 0 {
            if !result.ends_with('_') {
                result.push('_');
            }
            result.push(c);
        } else {
            result.extend(c.to_uppercase());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("foo-bar-baz"), "FooBarBaz");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("hello_world"), "helloWorld");
        assert_eq!(to_camel_case("Foo"), "foo");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_to_constant_case() {
        assert_eq!(to_constant_case("maxRetries"), "MAX_RETRIES");
        assert_eq!(to_constant_case("hello_world"), "HELLO_WORLD");
        assert_eq!(to_constant_case("some-value"), "SOME_VALUE");
        assert_eq!(to_constant_case("Simple"), "SIMPLE");
    }
}
