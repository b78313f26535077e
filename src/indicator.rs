//! Page indicator for a carousel's navigation line.
//!
//! The indicator only reads a pager's position; it never moves the window.

use crate::pager::WindowedPager;
use serde::Deserialize;

/// How the current position is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    /// Page numbers, e.g. `"2/3"`.
    #[default]
    Arabic,
    /// One dot per page, e.g. `"○ • ○"`.
    Dots,
}

/// Renders a pager's page position.
///
/// # Examples
///
/// ```rust
/// use bubbletea_carousel::indicator::{Indicator, Type};
/// use bubbletea_carousel::pager::WindowedPager;
///
/// let mut pager = WindowedPager::new((1..=10u64).collect(), 4).unwrap();
/// let mut indicator = Indicator::new();
/// assert_eq!(indicator.view(&pager), "1/3");
///
/// pager.step_forward();
/// indicator.indicator_type = Type::Dots;
/// assert_eq!(indicator.view(&pager), "○ • ○");
/// ```
#[derive(Debug, Clone)]
pub struct Indicator {
    /// Display style.
    pub indicator_type: Type,
    /// Dot for the page in view.
    pub active_dot: String,
    /// Dot for the other pages.
    pub inactive_dot: String,
    /// Format for Arabic mode; the first `%d` is the page, the second the total.
    pub arabic_format: String,
}

impl Default for Indicator {
    fn default() -> Self {
        Self {
            indicator_type: Type::default(),
            active_dot: "•".to_string(),
            inactive_dot: "○".to_string(),
            arabic_format: "%d/%d".to_string(),
        }
    }
}

impl Indicator {
    /// Creates an Arabic indicator with the default dots and format.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display style (builder pattern).
    pub fn with_type(mut self, indicator_type: Type) -> Self {
        self.indicator_type = indicator_type;
        self
    }

    /// Sets the active and inactive dots (builder pattern).
    pub fn with_dots(mut self, active: &str, inactive: &str) -> Self {
        self.active_dot = active.to_string();
        self.inactive_dot = inactive.to_string();
        self
    }

    /// Sets the Arabic format string (builder pattern).
    pub fn with_arabic_format(mut self, format: &str) -> Self {
        self.arabic_format = format.to_string();
        self
    }

    /// Renders the indicator for `pager`'s current window.
    pub fn view<T>(&self, pager: &WindowedPager<T>) -> String {
        let page = pager.current_page();
        let total = pager.total_pages();
        match self.indicator_type {
            Type::Arabic => self.arabic_view(page, total),
            Type::Dots => self.dots_view(page, total),
        }
    }

    fn arabic_view(&self, page: usize, total: usize) -> String {
        self.arabic_format
            .replacen("%d", &(page + 1).to_string(), 1)
            .replacen("%d", &total.to_string(), 1)
    }

    fn dots_view(&self, page: usize, total: usize) -> String {
        (0..total)
            .map(|i| {
                if i == page {
                    self.active_dot.as_str()
                } else {
                    self.inactive_dot.as_str()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
