/// Input validation
///
/// Anything non-blank is accepted as free text. Input that starts with
/// `http://` or `https://` must also parse as an absolute URL.

use url::Url;

use crate::error::ValidationError;

/// Prefixes that mark input as a URL (case-sensitive)
pub const URL_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Text that passed validation, kept exactly as the user typed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput(String);

impl ValidatedInput {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Check whether text starts with one of the URL prefixes
pub fn looks_like_url(input: &str) -> bool {
    URL_PREFIXES.iter().any(|prefix| input.starts_with(prefix))
}

/// Validate raw user input
///
/// Returns the input unchanged (no trimming) on success.
pub fn validate(input: &str) -> Result<ValidatedInput, ValidationError> {
    if input.trim().is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    if looks_like_url(input) && Url::parse(input).is_err() {
        return Err(ValidationError::MalformedUrl);
    }

    Ok(ValidatedInput(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_rejected() {
        assert_eq!(validate(""), Err(ValidationError::EmptyInput));
        assert_eq!(validate("   "), Err(ValidationError::EmptyInput));
        assert_eq!(validate("\t\n"), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn test_free_text_always_accepted() {
        for input in [
            "not a url but text",
            "www.example.com",
            "ftp://x",
            "HTTP://UPPERCASE IS FREE TEXT",
            "http:/almost",
            "  padded  ",
            "héllo wörld 🎉",
        ] {
            let validated = validate(input).expect(input);
            assert_eq!(validated.as_str(), input);
        }
    }

    #[test]
    fn test_well_formed_urls_accepted() {
        for input in [
            "https://example.com",
            "http://localhost:8080/path?q=1#frag",
            "https://192.168.0.1",
        ] {
            assert!(validate(input).is_ok(), "{input} should validate");
        }
    }

    #[test]
    fn test_malformed_urls_rejected() {
        for input in ["https://", "http://not a url", "http://bad url", "https://exa mple.com"] {
            assert_eq!(validate(input), Err(ValidationError::MalformedUrl), "{input}");
        }
    }

    #[test]
    fn test_input_not_trimmed() {
        let validated = validate(" text ").unwrap();
        assert_eq!(validated.into_inner(), " text ");
    }
}
