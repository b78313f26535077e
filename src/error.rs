//! Error types for the carousel crate.

use thiserror::Error;

/// Result type for fallible carousel operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing pagers and carousels.
///
/// Every operation on an already-built [`WindowedPager`](crate::pager::WindowedPager)
/// is total; only construction and configuration loading can fail.
#[derive(Error, Debug)]
pub enum Error {
    /// A constructor argument was out of range, such as a zero page size.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Carousel configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = Error::InvalidArgument("page size must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid argument: page size must be positive"
        );
    }

    #[test]
    fn test_config_error_from_toml() {
        let parse = toml::from_str::<toml::Value>("page_size = ");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}
