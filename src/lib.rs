#![warn(missing_docs)]

//! # bubbletea-carousel
//!
//! Boundary-safe, windowed paging over an ordered list of records, plus a
//! carousel component for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications built on it.
//!
//! ## Overview
//!
//! The crate has two layers:
//!
//! - [`WindowedPager`] is a framework-free value type. It keeps the index of
//!   the first visible record, steps a full page at a time, and clamps that
//!   index whenever the list changes so the window never runs past the end.
//! - [`Carousel`] wraps a pager in the Elm Architecture shape used by bubbletea
//!   components: `update()` reacts to key messages, `view()` renders a row of
//!   cards with a `‹ 2/3 ›` navigation line.
//!
//! Records only need an identity, expressed by the [`Record`] trait. The
//! [`record`] module also provides the [`Event`] and [`Media`] records served
//! by the portfolio API, with the orderings their carousels use.
//!
//! ## Paging
//!
//! ```rust
//! use bubbletea_carousel::WindowedPager;
//!
//! let mut pager = WindowedPager::new((1..=10u64).collect(), 4)?;
//! assert_eq!(pager.visible_window(), &[1, 2, 3, 4]);
//! assert!(!pager.can_step_backward());
//!
//! pager.step_forward();
//! pager.step_forward();
//! assert_eq!(pager.visible_window(), &[7, 8, 9, 10]);
//!
//! // Deleting a record never leaves the window dangling.
//! pager.remove_item(&10);
//! assert_eq!(pager.visible_window(), &[6, 7, 8, 9]);
//! # Ok::<(), bubbletea_carousel::Error>(())
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_carousel::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     events: Carousel<Event, EventCard>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut events = Carousel::from_config(Vec::new(), &CarouselConfig::events(), EventCard)
//!             .expect("events page size is positive");
//!         let cmd = events.focus();
//!         (Self { events }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.events.update(&msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.events.view()
//!     }
//! }
//! ```

pub mod carousel;
pub mod config;
pub mod error;
pub mod indicator;
pub mod key;
pub mod pager;
pub mod record;

use bubbletea_rs::Cmd;

/// Focus management for components.
///
/// A focused component reacts to key messages; a blurred one ignores them, so
/// several carousels can share one screen with only one responding to keys.
///
/// ```rust
/// use bubbletea_carousel::prelude::*;
///
/// let mut media = Carousel::from_config(Vec::<Media>::new(), &CarouselConfig::media(), MediaCard).unwrap();
/// assert!(!media.focused());
///
/// media.focus();
/// assert!(media.focused());
///
/// media.blur();
/// assert!(!media.focused());
/// ```
pub trait Component {
    /// Gives the component keyboard focus.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes keyboard focus.
    fn blur(&mut self);

    /// Returns true if the component has keyboard focus.
    fn focused(&self) -> bool;
}

pub use carousel::{CardDelegate, Carousel, CarouselKeyMap, EventCard, MediaCard, Styles};
pub use config::CarouselConfig;
pub use error::{Error, Result};
pub use indicator::{Indicator, Type as IndicatorType};
pub use pager::WindowedPager;
pub use record::{Event, Media, MediaKind, Record};

/// Commonly used types in one import.
pub mod prelude {
    pub use crate::carousel::{CardDelegate, Carousel, CarouselKeyMap, EventCard, MediaCard};
    pub use crate::config::CarouselConfig;
    pub use crate::error::{Error, Result};
    pub use crate::indicator::{Indicator, Type as IndicatorType};
    pub use crate::key::{Binding, KeyMap};
    pub use crate::pager::WindowedPager;
    pub use crate::record::{Event, Media, MediaKind, Record};
    pub use crate::Component;
}
