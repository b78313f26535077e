//! Records that can be paged through a carousel.
//!
//! A pager only needs to know how to identify a record; everything else about
//! the record shape is left to the caller. This module defines that identity
//! contract as the [`Record`] trait and provides the two record types served
//! by the portfolio listing endpoints: [`Event`] and [`Media`].
//!
//! Listing endpoints return records in no particular order. Callers sort them
//! once, before handing them to a pager, with [`sort_events_upcoming`] or
//! [`sort_media_newest_first`]; the pager never reorders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A record with a stable identity.
///
/// # Examples
///
/// ```rust
/// use bubbletea_carousel::record::Record;
///
/// #[derive(Debug, Clone)]
/// struct Track {
///     slug: String,
///     title: String,
/// }
///
/// impl Record for Track {
///     type Id = String;
///
///     fn id(&self) -> String {
///         self.slug.clone()
///     }
/// }
/// ```
pub trait Record {
    /// The identity type. Two records with equal ids are the same record.
    type Id: PartialEq + Clone + Debug;

    /// Returns this record's identity.
    fn id(&self) -> Self::Id;
}

impl Record for u64 {
    type Id = u64;

    fn id(&self) -> u64 {
        *self
    }
}

/// A scheduled performance as returned by the events listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Server-assigned identifier.
    pub id: u64,
    /// Event title shown on the card.
    pub title: String,
    /// When the event starts.
    pub datetime: DateTime<Utc>,
    /// Venue or city.
    #[serde(default)]
    pub location: String,
    /// Link to tickets or the venue page.
    #[serde(default)]
    pub event_url: Option<String>,
    /// URL of the event artwork.
    #[serde(default)]
    pub image: Option<String>,
}

impl Record for Event {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }
}

/// An entry in the media gallery: an uploaded image, a YouTube link, or both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    /// Server-assigned identifier.
    pub id: u64,
    /// URL of the uploaded image, if any.
    #[serde(default)]
    pub image: Option<String>,
    /// Watch or short link, if any.
    #[serde(default)]
    pub youtube_url: Option<String>,
    /// Production this entry belongs to.
    #[serde(default)]
    pub production: Option<u64>,
    /// Upload timestamp.
    pub created_at: DateTime<Utc>,
}

/// What a [`Media`] entry displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// An uploaded image.
    Image,
    /// An embeddable YouTube video.
    Video,
    /// Both an uploaded image and an embeddable video, shown together.
    ImageAndVideo,
    /// Neither an image nor a recognised video link.
    Empty,
}

impl Media {
    /// Returns the embeddable player URL for this entry's YouTube link.
    pub fn embed_url(&self) -> Option<String> {
        self.youtube_url.as_deref().and_then(youtube_embed_url)
    }

    /// Returns the image URL, treating an empty string as no image.
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref().filter(|s| !s.is_empty())
    }

    /// Classifies the entry. An image and a video link are independent.
    pub fn kind(&self) -> MediaKind {
        match (self.image_url().is_some(), self.embed_url().is_some()) {
            (true, true) => MediaKind::ImageAndVideo,
            (true, false) => MediaKind::Image,
            (false, true) => MediaKind::Video,
            (false, false) => MediaKind::Empty,
        }
    }
}

impl Record for Media {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }
}

/// Orders events soonest first.
pub fn sort_events_upcoming(events: &mut [Event]) {
    events.sort_by(|a, b| a.datetime.cmp(&b.datetime));
}

/// Orders media entries most recently uploaded first.
pub fn sort_media_newest_first(media: &mut [Media]) {
    media.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Converts a YouTube watch or short link into its embed URL.
///
/// Accepts `...watch?v=<id>[&...]` and `...youtu.be/<id>[?...]`. Any other
/// link, or one with an empty video id, yields `None`.
///
/// # Examples
///
/// ```rust
/// use bubbletea_carousel::record::youtube_embed_url;
///
/// assert_eq!(
///     youtube_embed_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s").as_deref(),
///     Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
/// );
/// assert_eq!(
///     youtube_embed_url("https://youtu.be/dQw4w9WgXcQ?si=abc").as_deref(),
///     Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
/// );
/// assert_eq!(youtube_embed_url("https://vimeo.com/123"), None);
/// ```
pub fn youtube_embed_url(url: &str) -> Option<String> {
    let video_id = if let Some((_, rest)) = url.split_once("watch?v=") {
        rest.split('&').next()
    } else if let Some((_, rest)) = url.split_once("youtu.be/") {
        rest.split('?').next()
    } else {
        None
    }?;

    if video_id.is_empty() {
        return None;
    }
    Some(format!("https://www.youtube.com/embed/{video_id}"))
}

/// Parses a listing endpoint response body into records.
///
/// # Examples
///
/// ```rust
/// use bubbletea_carousel::record::{parse_listing, Event};
///
/// let body = r#"[{"id": 7, "title": "Spring Recital",
///                 "datetime": "2025-04-12T19:30:00Z", "location": "Town Hall"}]"#;
/// let events: Vec<Event> = parse_listing(body).unwrap();
/// assert_eq!(events[0].title, "Spring Recital");
/// assert_eq!(events[0].event_url, None);
/// ```
pub fn parse_listing<T>(body: &str) -> serde_json::Result<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_str(body)
}
