use crate::utils::error::{FetchError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(FetchError::Config {
            field: field_name.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(FetchError::Config {
                field: field_name.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(FetchError::Config {
            field: field_name.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FetchError::Validation {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(FetchError::Config {
            field: field_name.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("backend_url", "https://example.com").is_ok());
        assert!(validate_url("backend_url", "http://example.com").is_ok());
        assert!(validate_url("backend_url", "").is_err());
        assert!(validate_url("backend_url", "invalid-url").is_err());
        assert!(validate_url("backend_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("seller_id", "S1").is_ok());
        assert!(validate_non_empty_string("seller_id", "   ").is_err());
        assert!(validate_non_empty_string("seller_id", "").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("listing_limit", 5, 1, 5).is_ok());
        assert!(validate_range("listing_limit", 0, 1, 5).is_err());
        assert!(validate_range("listing_limit", 6, 1, 5).is_err());
    }
}
