//! A carousel component for bubbletea-rs.
//!
//! The carousel owns a [`WindowedPager`] and renders its visible window as a
//! row of cards with a navigation line underneath:
//!
//! ```text
//! Upcoming Events
//! Spring Recital      Summer Gala         Autumn Tour
//! Sat Apr 12, 2025    Sun Jun 1, 2025     Fri Sep 5, 2025
//! Town Hall           Opera House         Main Square
//!
//! ‹ 1/2 ›
//! ```
//!
//! How a single record becomes a card is decided by a [`CardDelegate`]. The
//! crate ships [`EventCard`] and [`MediaCard`] for the portfolio record types.
//!
//! Fetching records is the host application's job. After a successful listing
//! request the host calls [`Carousel::replace_items`]; after a confirmed delete
//! it calls [`Carousel::remove_item`].

use crate::config::CarouselConfig;
use crate::error::Result;
use crate::indicator::Indicator;
use crate::key::{self, KeyMap as KeyMapTrait};
use crate::pager::WindowedPager;
use crate::record::{Event, Media, Record};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use tracing::trace;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Renders one record as a card.
pub trait CardDelegate<T> {
    /// Returns the card's lines. Lines wider than `width` are truncated by the
    /// carousel, so delegates may ignore `width` for plain text.
    fn render(&self, item: &T, width: usize) -> Vec<String>;
}

impl<T, F> CardDelegate<T> for F
where
    F: Fn(&T, usize) -> Vec<String>,
{
    fn render(&self, item: &T, width: usize) -> Vec<String> {
        self(item, width)
    }
}

/// Card showing an event's title, date and location.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventCard;

impl CardDelegate<Event> for EventCard {
    fn render(&self, event: &Event, _width: usize) -> Vec<String> {
        vec![
            event.title.clone(),
            event.datetime.format("%a %b %-d, %Y").to_string(),
            event.location.clone(),
        ]
    }
}

/// Card showing what a media entry displays and when it was uploaded.
///
/// An entry with both an image and a video link gets one line for each.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaCard;

impl CardDelegate<Media> for MediaCard {
    fn render(&self, media: &Media, _width: usize) -> Vec<String> {
        let mut lines = Vec::with_capacity(3);
        if let Some(image) = media.image_url() {
            lines.push(format!("[image] {image}"));
        }
        if let Some(embed) = media.embed_url() {
            lines.push(format!("[video] {embed}"));
        }
        if lines.is_empty() {
            lines.push("[no media]".to_string());
        }
        lines.push(media.created_at.format("%b %-d, %Y %H:%M").to_string());
        lines
    }
}

/// Key bindings for carousel navigation.
#[derive(Debug, Clone)]
pub struct CarouselKeyMap {
    /// Previous page. Default keys: Left Arrow, 'h', PageUp.
    pub prev_page: key::Binding,
    /// Next page. Default keys: Right Arrow, 'l', PageDown.
    pub next_page: key::Binding,
    /// First page. Default keys: Home, 'g'.
    pub go_to_start: key::Binding,
    /// Last page. Default keys: End, 'G'.
    pub go_to_end: key::Binding,
}

impl Default for CarouselKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["left", "h", "pgup"]),
                key::with_help("←/h", "prev"),
            ]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["right", "l", "pgdown"]),
                key::with_help("→/l", "next"),
            ]),
            go_to_start: key::new_binding(vec![
                key::with_keys_str(&["home", "g"]),
                key::with_help("g/home", "first"),
            ]),
            go_to_end: key::new_binding(vec![
                key::with_keys_str(&["end", "G", "shift+G"]),
                key::with_help("G/end", "last"),
            ]),
        }
    }
}

impl KeyMapTrait for CarouselKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.prev_page, &self.next_page],
            vec![&self.go_to_start, &self.go_to_end],
        ]
    }
}

/// Styles used by [`Carousel::view`].
#[derive(Debug, Clone)]
pub struct Styles {
    /// Heading above the cards.
    pub title: Style,
    /// Empty-state message.
    pub empty: Style,
    /// Arrow for a step that is possible.
    pub arrow_active: Style,
    /// Arrow for a step that is not.
    pub arrow_inactive: Style,
    /// Page indicator.
    pub indicator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        Self {
            title: Style::new().bold(true),
            empty: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            arrow_active: Style::new().bold(true),
            arrow_inactive: Style::new().faint(true),
            indicator: Style::new().foreground(subdued),
        }
    }
}

/// A paged row of cards driven by key messages.
///
/// # Examples
///
/// ```rust
/// use bubbletea_carousel::carousel::Carousel;
/// use bubbletea_carousel::Component;
/// use bubbletea_rs::{KeyMsg, Msg};
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let cards = |n: &u64, _width: usize| vec![format!("#{n}")];
/// let mut carousel = Carousel::new((1..=10u64).collect(), 4, cards).unwrap();
/// carousel.focus();
///
/// let right: Msg = Box::new(KeyMsg { key: KeyCode::Right, modifiers: KeyModifiers::NONE });
/// carousel.update(&right);
/// assert_eq!(carousel.pager().start_index(), 4);
/// ```
pub struct Carousel<T, D> {
    pager: WindowedPager<T>,
    delegate: D,
    /// Navigation key bindings.
    pub keymap: CarouselKeyMap,
    /// Page indicator on the navigation line.
    pub indicator: Indicator,
    /// Rendering styles.
    pub styles: Styles,
    title: Option<String>,
    empty_message: String,
    card_width: usize,
    focus: bool,
}

impl<T: Record, D: CardDelegate<T>> Carousel<T, D> {
    /// Creates an unfocused carousel over `items`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
    /// `page_size` is zero.
    pub fn new(items: Vec<T>, page_size: usize, delegate: D) -> Result<Self> {
        Self::from_config(items, &CarouselConfig::default().with_page_size(page_size), delegate)
    }

    /// Creates an unfocused carousel from settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
    /// `config.page_size` is zero.
    pub fn from_config(items: Vec<T>, config: &CarouselConfig, delegate: D) -> Result<Self> {
        let pager = WindowedPager::new(items, config.page_size)?;
        let mut carousel = Self {
            pager,
            delegate,
            keymap: CarouselKeyMap::default(),
            indicator: config.indicator(),
            styles: Styles::default(),
            title: config.title.clone(),
            empty_message: config.empty_message.clone(),
            card_width: config.card_width.max(1),
            focus: false,
        };
        carousel.update_keybindings();
        Ok(carousel)
    }

    /// Sets the heading (builder pattern).
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Sets the empty-state message (builder pattern).
    pub fn with_empty_message(mut self, message: &str) -> Self {
        self.empty_message = message.to_string();
        self
    }

    /// Sets the indicator (builder pattern).
    pub fn with_indicator(mut self, indicator: Indicator) -> Self {
        self.indicator = indicator;
        self
    }

    /// Sets the key bindings (builder pattern).
    pub fn with_keymap(mut self, keymap: CarouselKeyMap) -> Self {
        self.keymap = keymap;
        self.update_keybindings();
        self
    }

    /// Sets the card width in columns (builder pattern). Minimum 1.
    pub fn with_card_width(mut self, width: usize) -> Self {
        self.card_width = width.max(1);
        self
    }

    /// The underlying pager.
    pub fn pager(&self) -> &WindowedPager<T> {
        &self.pager
    }

    /// Records currently in view.
    pub fn visible_window(&self) -> &[T] {
        self.pager.visible_window()
    }

    /// Moves back one page.
    pub fn step_backward(&mut self) {
        self.pager.step_backward();
        self.update_keybindings();
    }

    /// Moves forward one page.
    pub fn step_forward(&mut self) {
        self.pager.step_forward();
        self.update_keybindings();
    }

    /// Removes a record after the host confirmed its deletion.
    pub fn remove_item(&mut self, id: &T::Id) -> Option<T> {
        let removed = self.pager.remove_item(id);
        self.update_keybindings();
        removed
    }

    /// Replaces a record after the host confirmed an edit.
    pub fn update_item(&mut self, item: T) -> bool {
        self.pager.update_item(item)
    }

    /// Replaces all records after a refetch, returning to the first page.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.pager.replace_items(items);
        self.update_keybindings();
    }

    /// Handles navigation keys. Ignored while unfocused.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }
        let key_msg = msg.downcast_ref::<KeyMsg>()?;

        if self.keymap.next_page.matches(key_msg) {
            self.pager.step_forward();
        } else if self.keymap.prev_page.matches(key_msg) {
            self.pager.step_backward();
        } else if self.keymap.go_to_start.matches(key_msg) {
            self.pager.step_to_start();
        } else if self.keymap.go_to_end.matches(key_msg) {
            self.pager.step_to_end();
        } else {
            return None;
        }
        trace!(start = self.pager.start_index(), "carousel navigated");
        self.update_keybindings();
        None
    }

    /// Renders the title, the visible cards and the navigation line.
    pub fn view(&self) -> String {
        let mut sections = Vec::new();
        if let Some(title) = &self.title {
            sections.push(self.styles.title.render(title));
        }

        if self.pager.is_empty() {
            sections.push(self.styles.empty.render(&self.empty_message));
            return sections.join("\n");
        }

        let cards: Vec<String> = self
            .pager
            .visible_window()
            .iter()
            .map(|item| self.render_card(item))
            .collect();
        let mut row: Vec<&str> = Vec::with_capacity(cards.len() * 2);
        for (i, card) in cards.iter().enumerate() {
            if i > 0 {
                row.push(" ");
            }
            row.push(card);
        }
        sections.push(lipgloss::join_horizontal(lipgloss::TOP, &row));
        sections.push(String::new());
        sections.push(self.nav_view());
        sections.join("\n")
    }

    fn render_card(&self, item: &T) -> String {
        self.delegate
            .render(item, self.card_width)
            .iter()
            .map(|line| fit_width(line, self.card_width))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn nav_view(&self) -> String {
        let arrow = |glyph: &str, active: bool| {
            if active {
                self.styles.arrow_active.render(glyph)
            } else {
                self.styles.arrow_inactive.render(glyph)
            }
        };
        format!(
            "{} {} {}",
            arrow("‹", self.pager.can_step_backward()),
            self.styles.indicator.render(&self.indicator.view(&self.pager)),
            arrow("›", self.pager.can_step_forward()),
        )
    }

    fn update_keybindings(&mut self) {
        let back = self.pager.can_step_backward();
        let forward = self.pager.can_step_forward();
        self.keymap.prev_page.set_enabled(back);
        self.keymap.go_to_start.set_enabled(back);
        self.keymap.next_page.set_enabled(forward);
        self.keymap.go_to_end.set_enabled(forward);
    }
}

impl<T: Record, D: CardDelegate<T>> Component for Carousel<T, D> {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

/// Truncates `s` to `width` columns, ending in `…` when cut, and pads it with
/// spaces to exactly `width`.
fn fit_width(s: &str, width: usize) -> String {
    let mut out = String::new();
    if s.width() <= width {
        out.push_str(s);
    } else {
        let mut used = 0;
        for ch in s.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w + 1 > width {
                break;
            }
            out.push(ch);
            used += w;
        }
        out.push('…');
    }
    let pad = width.saturating_sub(out.width());
    out.extend(std::iter::repeat(' ').take(pad));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn numbers(n: &u64, _width: usize) -> Vec<String> {
        vec![format!("#{n}")]
    }

    type NumberCard = fn(&u64, usize) -> Vec<String>;

    fn carousel(len: u64, page_size: usize) -> Carousel<u64, NumberCard> {
        let mut c = Carousel::new((1..=len).collect(), page_size, numbers as NumberCard).unwrap();
        c.focus();
        c
    }

    fn plain(s: &str) -> String {
        strip_ansi_escapes::strip_str(s)
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        assert!(Carousel::new(vec![1u64], 0, numbers).is_err());
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut c = carousel(10, 4);
        c.blur();
        c.update(&key(KeyCode::Right));
        assert_eq!(c.pager().start_index(), 0);
    }

    #[test]
    fn test_keys_navigate() {
        let mut c = carousel(10, 4);
        c.update(&key(KeyCode::Right));
        assert_eq!(c.pager().start_index(), 4);
        c.update(&key(KeyCode::End));
        assert_eq!(c.pager().start_index(), 6);
        c.update(&key(KeyCode::Char('h')));
        assert_eq!(c.pager().start_index(), 2);
        c.update(&key(KeyCode::Home));
        assert_eq!(c.pager().start_index(), 0);
    }

    #[test]
    fn test_non_key_message_is_ignored() {
        let mut c = carousel(10, 4);
        let msg: Msg = Box::new("tick");
        assert!(c.update(&msg).is_none());
        assert_eq!(c.pager().start_index(), 0);
    }

    #[test]
    fn test_bindings_follow_bounds() {
        let mut c = carousel(10, 4);
        assert!(!c.keymap.prev_page.enabled());
        assert!(c.keymap.next_page.enabled());

        c.step_forward();
        c.step_forward();
        assert!(c.keymap.prev_page.enabled());
        assert!(!c.keymap.next_page.enabled());
        assert!(!c.keymap.go_to_end.enabled());

        c.replace_items((1..=3).collect());
        assert!(!c.keymap.prev_page.enabled());
        assert!(!c.keymap.next_page.enabled());
    }

    #[test]
    fn test_removal_reenables_nothing_past_end() {
        let mut c = carousel(5, 4);
        c.step_forward();
        assert_eq!(c.pager().start_index(), 1);
        c.remove_item(&5);
        assert_eq!(c.pager().start_index(), 0);
        assert!(!c.keymap.prev_page.enabled());
        assert!(!c.keymap.next_page.enabled());
    }

    #[test]
    fn test_view_cards_and_nav() {
        let c = carousel(10, 4).with_card_width(3).with_title("Numbers");
        let view = plain(&c.view());
        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines[0], "Numbers");
        assert_eq!(lines[1].trim_end(), "#1  #2  #3  #4");
        assert_eq!(lines[3], "‹ 1/3 ›");
    }

    #[test]
    fn test_view_empty_message() {
        let c = carousel(0, 4).with_empty_message("No upcoming events.");
        assert_eq!(plain(&c.view()), "No upcoming events.");
    }

    #[test]
    fn test_fit_width_truncates_and_pads() {
        assert_eq!(fit_width("abc", 5), "abc  ");
        assert_eq!(fit_width("abcdef", 4), "abc…");
        assert_eq!(fit_width("日本語", 4), "日… ");
    }

    #[test]
    fn test_event_card() {
        let event = Event {
            id: 1,
            title: "Spring Recital".to_string(),
            datetime: Utc.with_ymd_and_hms(2025, 4, 12, 19, 30, 0).unwrap(),
            location: "Town Hall".to_string(),
            event_url: None,
            image: None,
        };
        assert_eq!(
            EventCard.render(&event, 20),
            vec!["Spring Recital", "Sat Apr 12, 2025", "Town Hall"]
        );
    }

    #[test]
    fn test_media_card_kinds() {
        let mut media = Media {
            id: 1,
            image: None,
            youtube_url: Some("https://www.youtube.com/watch?v=abc".to_string()),
            production: None,
            created_at: Utc.with_ymd_and_hms(2025, 1, 5, 9, 5, 0).unwrap(),
        };
        assert_eq!(
            MediaCard.render(&media, 40),
            vec!["[video] https://www.youtube.com/embed/abc", "Jan 5, 2025 09:05"]
        );
        media.youtube_url = None;
        assert_eq!(
            MediaCard.render(&media, 40),
            vec!["[no media]", "Jan 5, 2025 09:05"]
        );
    }

    #[test]
    fn test_media_card_shows_image_and_video_together() {
        let media = Media {
            id: 2,
            image: Some("i.jpg".to_string()),
            youtube_url: Some("https://youtu.be/x".to_string()),
            production: None,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        };
        assert_eq!(
            MediaCard.render(&media, 40),
            vec![
                "[image] i.jpg",
                "[video] https://www.youtube.com/embed/x",
                "Jan 1, 2025 00:00",
            ]
        );
    }

    #[test]
    fn test_short_help_lists_prev_next() {
        let keymap = CarouselKeyMap::default();
        let help: Vec<&str> = keymap
            .short_help()
            .iter()
            .map(|b| b.help().desc.as_str())
            .collect();
        assert_eq!(help, vec!["prev", "next"]);
        assert_eq!(keymap.full_help().len(), 2);
    }
}
