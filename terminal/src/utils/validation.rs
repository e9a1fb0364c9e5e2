/// Validation utilities for user input

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert into a `Result`, keeping the error message.
    pub fn into_result(self) -> Result<(), String> {
        match self.error {
            Some(message) if !self.is_valid => Err(message),
            _ => Ok(()),
        }
    }
}

/// Template families the backend knows how to generate.
pub const TEMPLATE_TYPES: [&str; 2] = ["listicle", "howto"];

/// Validate an article id before it is placed in a path
pub fn validate_article_id(id: &str) -> ValidationResult {
    if id.trim().is_empty() {
        return ValidationResult::err("Article id is required");
    }

    if id.chars().any(char::is_control) {
        return ValidationResult::err("Article id contains control characters");
    }

    ValidationResult::ok()
}

/// Validate text submitted for analysis
///
/// The backend accepts an empty title or an empty content, but not both.
pub fn validate_analysis_text(title: &str, content: &str) -> ValidationResult {
    if title.trim().is_empty() && content.trim().is_empty() {
        return ValidationResult::err("Title or content is required");
    }

    ValidationResult::ok()
}

/// Validate template type
pub fn validate_template_type(kind: &str) -> ValidationResult {
    if TEMPLATE_TYPES.contains(&kind) {
        ValidationResult::ok()
    } else {
        ValidationResult::err(format!(
            "Unknown template type '{}', expected one of: {}",
            kind,
            TEMPLATE_TYPES.join(", ")
        ))
    }
}

/// Validate a bearer token before it is stored
///
/// Surrounding whitespace is ignored; the token is stored trimmed.
pub fn validate_token(token: &str) -> ValidationResult {
    let token = token.trim();
    if token.is_empty() {
        return ValidationResult::err("Token is required");
    }

    if token.chars().any(char::is_whitespace) {
        return ValidationResult::err("Token cannot contain whitespace");
    }

    ValidationResult::ok()
}

/// Validate page number (1-based)
pub fn validate_page(page: u32) -> ValidationResult {
    if page == 0 {
        return ValidationResult::err("Page numbers start at 1");
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_article_id() {
        assert!(validate_article_id("abc123").is_valid);
        assert!(validate_article_id("a/b c").is_valid);
        assert!(!validate_article_id("").is_valid);
        assert!(!validate_article_id("   ").is_valid);
        assert!(!validate_article_id("abc\n").is_valid);
    }

    #[test]
    fn test_validate_analysis_text() {
        assert!(validate_analysis_text("标题", "").is_valid);
        assert!(validate_analysis_text("", "正文").is_valid);
        assert_eq!(
            validate_analysis_text(" ", "").into_result(),
            Err("Title or content is required".to_string())
        );
    }

    #[test]
    fn test_validate_template_type() {
        assert!(validate_template_type("listicle").is_valid);
        assert!(validate_template_type("howto").is_valid);
        assert!(!validate_template_type("essay").is_valid);
    }

    #[test]
    fn test_validate_token() {
        assert!(validate_token("eyJhbGciOi.abc").is_valid);
        assert!(!validate_token("").is_valid);
        assert!(!validate_token("two words").is_valid);
        assert!(validate_token(" padded-token\n").is_valid);
    }

    #[test]
    fn test_validate_page() {
        assert!(validate_page(1).is_valid);
        assert!(!validate_page(0).is_valid);
    }
}
