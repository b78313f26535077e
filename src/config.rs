//! Carousel settings loadable from TOML.
//!
//! ```toml
//! page_size = 3
//! indicator = "dots"
//! active_dot = "●"
//! empty_message = "No media available."
//! ```

use crate::error::Result;
use crate::indicator::{Indicator, Type};
use serde::Deserialize;

/// Page size of the home page's upcoming events carousel.
pub const EVENTS_PAGE_SIZE: usize = 4;

/// Page size of the media gallery carousel.
pub const MEDIA_PAGE_SIZE: usize = 3;

/// Settings for building a [`Carousel`](crate::carousel::Carousel).
///
/// Missing fields take their [`Default`] values. A zero `page_size` is
/// accepted here and rejected when the carousel is built.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Maximum number of cards in view.
    pub page_size: usize,
    /// Heading rendered above the cards.
    pub title: Option<String>,
    /// Indicator style.
    pub indicator: Type,
    /// Dot for the page in view.
    pub active_dot: String,
    /// Dot for the other pages.
    pub inactive_dot: String,
    /// Arabic indicator format.
    pub arabic_format: String,
    /// Shown instead of cards when there are no records.
    pub empty_message: String,
    /// Width of each card in columns.
    pub card_width: usize,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        let indicator = Indicator::default();
        Self {
            page_size: EVENTS_PAGE_SIZE,
            title: None,
            indicator: indicator.indicator_type,
            active_dot: indicator.active_dot,
            inactive_dot: indicator.inactive_dot,
            arabic_format: indicator.arabic_format,
            empty_message: "Nothing to show.".to_string(),
            card_width: 24,
        }
    }
}

impl CarouselConfig {
    /// Settings for the upcoming events carousel.
    pub fn events() -> Self {
        Self {
            page_size: EVENTS_PAGE_SIZE,
            title: Some("Upcoming Events".to_string()),
            empty_message: "No upcoming events.".to_string(),
            ..Self::default()
        }
    }

    /// Settings for the media gallery carousel.
    pub fn media() -> Self {
        Self {
            page_size: MEDIA_PAGE_SIZE,
            title: Some("Media Gallery".to_string()),
            empty_message: "No media available.".to_string(),
            card_width: 36,
            ..Self::default()
        }
    }

    /// Returns these settings with a different page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Parses settings from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if the document is not
    /// valid TOML or a field has the wrong type.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Builds the indicator these settings describe.
    pub fn indicator(&self) -> Indicator {
        Indicator::new()
            .with_type(self.indicator)
            .with_dots(&self.active_dot, &self.inactive_dot)
            .with_arabic_format(&self.arabic_format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let cfg = CarouselConfig::from_toml_str("page_size = 3\nindicator = \"dots\"").unwrap();
        assert_eq!(cfg.page_size, 3);
        assert_eq!(cfg.indicator, Type::Dots);
        assert_eq!(cfg.active_dot, "•");
        assert_eq!(cfg.title, None);
        assert_eq!(cfg.card_width, 24);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(
            CarouselConfig::from_toml_str("").unwrap(),
            CarouselConfig::default()
        );
    }

    #[test]
    fn test_wrong_type_is_config_error() {
        let err = CarouselConfig::from_toml_str("page_size = \"four\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_presets() {
        assert_eq!(CarouselConfig::events().page_size, 4);
        assert_eq!(CarouselConfig::media().page_size, 3);
        assert_eq!(CarouselConfig::media().empty_message, "No media available.");
    }

    #[test]
    fn test_indicator_from_config() {
        let cfg = CarouselConfig {
            arabic_format: "%d of %d".to_string(),
            ..CarouselConfig::default()
        };
        assert_eq!(cfg.indicator().arabic_format, "%d of %d");
    }
}
