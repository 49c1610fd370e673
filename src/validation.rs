//! Input validation utilities

/// Treat absent and empty-string fields the same way: both count as missing.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_accepts_value() {
        assert_eq!(non_empty(&Some("maya".to_string())), Some("maya"));
    }

    #[test]
    fn test_non_empty_rejects_absent_field() {
        assert_eq!(non_empty(&None), None);
    }

    #[test]
    fn test_non_empty_rejects_empty_string() {
        assert_eq!(non_empty(&Some(String::new())), None);
    }
}
