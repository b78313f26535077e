//! Windowed pagination over an in-memory, ordered collection of records.
//!
//! A [`WindowedPager`] tracks the index of the first visible record and a fixed
//! page size. The visible window is always the contiguous slice
//! `items[start_index..start_index + page_size]`, and `start_index` is kept in
//! `0..=max(0, len - page_size)` by every operation, including removals.
//!
//! The pager is a plain value: it does no I/O, never reorders its records, and
//! leaves rendering to the caller (see [`Carousel`](crate::carousel::Carousel)
//! for a bubbletea-rs component built on top of it).

use crate::error::{Error, Result};
use crate::record::Record;
use tracing::{debug, trace};

/// Boundary-clamped, full-page stepping window over a list of records.
///
/// # Examples
///
/// ```rust
/// use bubbletea_carousel::pager::WindowedPager;
///
/// let mut pager = WindowedPager::new((1..=10u64).collect(), 4).unwrap();
/// assert_eq!(pager.visible_window(), &[1, 2, 3, 4]);
///
/// pager.step_forward();
/// assert_eq!(pager.visible_window(), &[5, 6, 7, 8]);
///
/// // The last step is clamped so the window stays full.
/// pager.step_forward();
/// assert_eq!(pager.start_index(), 6);
/// assert_eq!(pager.visible_window(), &[7, 8, 9, 10]);
/// assert!(!pager.can_step_forward());
/// ```
#[derive(Debug, Clone)]
pub struct WindowedPager<T> {
    items: Vec<T>,
    page_size: usize,
    start_index: usize,
}

impl<T: Record> WindowedPager<T> {
    /// Creates a pager positioned at the first record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `page_size` is zero.
    ///
    /// ```rust
    /// use bubbletea_carousel::pager::WindowedPager;
    /// use bubbletea_carousel::Error;
    ///
    /// let err = WindowedPager::<u64>::new(vec![1, 2], 0).unwrap_err();
    /// assert!(matches!(err, Error::InvalidArgument(_)));
    /// ```
    pub fn new(items: Vec<T>, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::InvalidArgument(
                "page size must be positive".to_string(),
            ));
        }
        debug!(len = items.len(), page_size, "created windowed pager");
        Ok(Self {
            items,
            page_size,
            start_index: 0,
        })
    }

    /// Returns the records currently in view.
    ///
    /// The slice holds `min(page_size, len)` records.
    pub fn visible_window(&self) -> &[T] {
        let (start, end) = self.window_bounds();
        &self.items[start..end]
    }

    /// Returns the half-open index range of the visible window.
    pub fn window_bounds(&self) -> (usize, usize) {
        let end = (self.start_index + self.page_size).min(self.items.len());
        (self.start_index, end)
    }

    /// Moves the window back one page, stopping at the first record.
    pub fn step_backward(&mut self) {
        let previous = self.start_index;
        self.start_index = self.start_index.saturating_sub(self.page_size);
        trace!(from = previous, to = self.start_index, "stepped backward");
    }

    /// Moves the window forward one page, stopping at the last full window.
    pub fn step_forward(&mut self) {
        let previous = self.start_index;
        self.start_index = (self.start_index + self.page_size).min(self.max_start());
        trace!(from = previous, to = self.start_index, "stepped forward");
    }

    /// Moves the window to the first record.
    pub fn step_to_start(&mut self) {
        self.start_index = 0;
    }

    /// Moves the window to the last full window.
    pub fn step_to_end(&mut self) {
        self.start_index = self.max_start();
    }

    /// Returns true if there are records before the window.
    pub fn can_step_backward(&self) -> bool {
        self.start_index > 0
    }

    /// Returns true if there are records after the window.
    pub fn can_step_forward(&self) -> bool {
        self.start_index + self.page_size < self.items.len()
    }

    /// Removes the record with the given id and re-clamps the window.
    ///
    /// Returns the removed record, or `None` (leaving the pager untouched) when
    /// no record has that id. If the window would run past the shrunken list it
    /// is pulled back so it never ends on an empty page.
    ///
    /// ```rust
    /// use bubbletea_carousel::pager::WindowedPager;
    ///
    /// let mut pager = WindowedPager::new((1..=10u64).collect(), 4).unwrap();
    /// pager.step_to_end();
    /// assert_eq!(pager.start_index(), 6);
    ///
    /// assert_eq!(pager.remove_item(&10), Some(10));
    /// assert_eq!(pager.start_index(), 5);
    /// assert_eq!(pager.visible_window(), &[6, 7, 8, 9]);
    ///
    /// assert_eq!(pager.remove_item(&42), None);
    /// ```
    pub fn remove_item(&mut self, id: &T::Id) -> Option<T> {
        let position = self.items.iter().position(|item| item.id() == *id)?;
        let removed = self.items.remove(position);
        let previous = self.start_index;
        self.clamp();
        debug!(
            ?id,
            len = self.items.len(),
            from = previous,
            to = self.start_index,
            "removed record"
        );
        Some(removed)
    }

    /// Replaces the record sharing `item`'s id, keeping its position.
    ///
    /// Returns false, dropping `item`, when no record has that id.
    pub fn update_item(&mut self, item: T) -> bool {
        let id = item.id();
        match self.items.iter_mut().find(|existing| existing.id() == id) {
            Some(existing) => {
                *existing = item;
                debug!(?id, "updated record");
                true
            }
            None => false,
        }
    }

    /// Replaces every record and moves the window back to the top.
    pub fn replace_items(&mut self, items: Vec<T>) {
        debug!(
            old_len = self.items.len(),
            new_len = items.len(),
            "replaced records"
        );
        self.items = items;
        self.start_index = 0;
    }
}

impl<T> WindowedPager<T> {
    /// Index of the first visible record.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Maximum number of records in view at once.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of records in the collection.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All records, in order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the pager and returns its records.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Largest valid start index: `max(0, len - page_size)`.
    pub fn max_start(&self) -> usize {
        self.items.len().saturating_sub(self.page_size)
    }

    /// Zero-based page that the window currently shows.
    ///
    /// A window clamped against the end of the list counts as the last page.
    pub fn current_page(&self) -> usize {
        self.start_index.div_ceil(self.page_size)
    }

    /// Number of pages, at least one even for an empty list.
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size).max(1)
    }

    fn clamp(&mut self) {
        self.start_index = self.start_index.min(self.max_start());
    }
}
