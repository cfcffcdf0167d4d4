//! Offset pagination over a record source.
//!
//! This module provides the [`PageSource`] collaborator trait and
//! [`fetch_all`], which merges every page of a source into one list.

use tracing::debug;

use crate::error::{ReconcileError, ReconcileResult};

/// One page of records returned by a [`PageSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// The records on this page, in source order.
    pub items: Vec<T>,
    /// The source's own end-of-data hint. Advisory only: [`fetch_all`]
    /// terminates on page size alone.
    pub is_last_page: bool,
}

impl<T> Page<T> {
    /// Creates a page.
    pub fn new(items: Vec<T>, is_last_page: bool) -> Self {
        Self {
            items,
            is_last_page,
        }
    }

    /// Number of records on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the page holds no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A paginated, offset-addressed record source.
///
/// Implementations must be deterministic with respect to `offset` for a
/// stable snapshot of the data. Transport and parse failures are reported as
/// [`ReconcileError::Transport`].
pub trait PageSource<T> {
    /// Fetches the page starting at `offset`.
    fn fetch_page(&self, offset: usize) -> ReconcileResult<Page<T>>;
}

/// Fetches every page of `source` and concatenates the records in order.
///
/// Pages are requested at offsets `0, page_size, 2 * page_size, ...` until a
/// page comes back with fewer than `page_size` records. A full page is always
/// followed by another request, so a data set whose size is an exact multiple
/// of `page_size` ends with an empty page.
///
/// The next offset advances by the number of records actually received, so a
/// source that serves more than `page_size` records per page is never asked
/// for records it already returned.
///
/// Any error from the source aborts the fetch; records already received are
/// dropped.
///
/// # Errors
///
/// Returns [`ReconcileError::InvalidPageSize`] if `page_size` is zero, or the
/// source's error if any page fetch fails.
///
/// # Example
///
/// ```
/// use punchclock_reconcile::source::{fetch_all, VecPageSource};
///
/// let source = VecPageSource::new((0..120).collect::<Vec<u32>>(), 50);
/// let all = fetch_all(&source, 50)?;
///
/// assert_eq!(all.len(), 120);
/// assert_eq!(source.requests(), 3);
/// # Ok::<(), punchclock_reconcile::error::ReconcileError>(())
/// ```
pub fn fetch_all<T, S>(source: &S, page_size: usize) -> ReconcileResult<Vec<T>>
where
    S: PageSource<T> + ?Sized,
{
    if page_size == 0 {
        return Err(ReconcileError::InvalidPageSize);
    }

    let mut records = Vec::new();
    let mut offset = 0;

    loop {
        let page = source.fetch_page(offset)?;
        let received = page.len();
        debug!(
            offset,
            received,
            is_last_page = page.is_last_page,
            "Fetched page"
        );

        records.extend(page.items);

        if received < page_size {
            break;
        }
        offset += received;
    }

    debug!(total = records.len(), "Merged all pages");
    Ok(records)
}

/// An in-memory [`PageSource`] serving a vector in fixed-size pages.
///
/// Useful for feeding already-fetched records through the same pipeline as a
/// remote source. Counts the pages it serves.
#[derive(Debug)]
pub struct VecPageSource<T> {
    items: Vec<T>,
    page_size: usize,
    requests: std::cell::Cell<usize>,
}

impl<T: Clone> VecPageSource<T> {
    /// Creates a source serving `items` in pages of at most `page_size`.
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items,
            page_size,
            requests: std::cell::Cell::new(0),
        }
    }

    /// Number of pages requested so far.
    pub fn requests(&self) -> usize {
        self.requests.get()
    }
}

impl<T: Clone> PageSource<T> for VecPageSource<T> {
    fn fetch_page(&self, offset: usize) -> ReconcileResult<Page<T>> {
        self.requests.set(self.requests.get() + 1);

        let start = offset.min(self.items.len());
        let end = offset.saturating_add(self.page_size).min(self.items.len());
        let items = self.items[start..end].to_vec();
        let is_last_page = end >= self.items.len();

        Ok(Page::new(items, is_last_page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every offset requested and optionally fails at one offset.
    struct RecordingSource {
        total: usize,
        page_size: usize,
        fail_at: Option<usize>,
        offsets: RefCell<Vec<usize>>,
    }

    impl RecordingSource {
        fn new(total: usize, page_size: usize) -> Self {
            Self {
                total,
                page_size,
                fail_at: None,
                offsets: RefCell::new(Vec::new()),
            }
        }
    }

    impl PageSource<usize> for RecordingSource {
        fn fetch_page(&self, offset: usize) -> ReconcileResult<Page<usize>> {
            self.offsets.borrow_mut().push(offset);
            if self.fail_at == Some(offset) {
                return Err(ReconcileError::transport("fetch_page", "connection reset"));
            }
            let end = (offset + self.page_size).min(self.total);
            let items: Vec<usize> = (offset.min(self.total)..end).collect();
            Ok(Page::new(items, end >= self.total))
        }
    }

    #[test]
    fn test_partial_last_page_stops_fetching() {
        let source = RecordingSource::new(120, 50);
        let all = fetch_all(&source, 50).unwrap();

        assert_eq!(all.len(), 120);
        assert_eq!(all, (0..120).collect::<Vec<_>>());
        assert_eq!(*source.offsets.borrow(), vec![0, 50, 100]);
    }

    #[test]
    fn test_exact_multiple_confirms_with_empty_page() {
        let source = RecordingSource::new(100, 50);
        let all = fetch_all(&source, 50).unwrap();

        assert_eq!(all.len(), 100);
        assert_eq!(*source.offsets.borrow(), vec![0, 50, 100]);
    }

    #[test]
    fn test_empty_source_single_request() {
        let source = RecordingSource::new(0, 50);
        let all = fetch_all(&source, 50).unwrap();

        assert!(all.is_empty());
        assert_eq!(*source.offsets.borrow(), vec![0]);
    }

    #[test]
    fn test_last_page_hint_does_not_stop_full_page() {
        // The source flags the exactly-full page as last; the merger still
        // confirms with one more request.
        let source = VecPageSource::new((0..50).collect::<Vec<u32>>(), 50);
        let all = fetch_all(&source, 50).unwrap();

        assert_eq!(all.len(), 50);
        assert_eq!(source.requests(), 2);
    }

    #[test]
    fn test_error_aborts_and_propagates() {
        let mut source = RecordingSource::new(200, 50);
        source.fail_at = Some(100);

        let result = fetch_all(&source, 50);
        assert!(matches!(result, Err(ReconcileError::Transport { .. })));
        assert_eq!(*source.offsets.borrow(), vec![0, 50, 100]);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let source = RecordingSource::new(10, 50);
        let result = fetch_all(&source, 0);

        assert!(matches!(result, Err(ReconcileError::InvalidPageSize)));
        assert!(source.offsets.borrow().is_empty());
    }

    #[test]
    fn test_repeated_fetches_are_identical() {
        let source = VecPageSource::new((0..73).collect::<Vec<u32>>(), 20);
        let first = fetch_all(&source, 20).unwrap();
        let second = fetch_all(&source, 20).unwrap();

        assert_eq!(first, second);
        assert_eq!(source.requests(), 8);
    }

    #[test]
    fn test_source_serving_smaller_pages_than_requested() {
        // A source capped below the requested size terminates after its first page.
        let source = VecPageSource::new((0..30).collect::<Vec<u32>>(), 10);
        let all = fetch_all(&source, 50).unwrap();

        assert_eq!(all.len(), 10);
        assert_eq!(source.requests(), 1);
    }

    #[test]
    fn test_oversized_page_is_not_merged_twice() {
        // The source pages by 500 while the merger asks for 50 at a time.
        let source = VecPageSource::new((0..120).collect::<Vec<u32>>(), 500);
        let all = fetch_all(&source, 50).unwrap();

        assert_eq!(all.len(), 120);
        assert_eq!(all, (0..120).collect::<Vec<_>>());
        assert_eq!(source.requests(), 2);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Merging returns every record in order for any size and page size
        #[test]
        fn merges_all_records_in_order(total in 0usize..500, page_size in 1usize..80) {
            let items: Vec<usize> = (0..total).collect();
            let source = VecPageSource::new(items.clone(), page_size);
            let all = fetch_all(&source, page_size).unwrap();

            prop_assert_eq!(all, items);
            prop_assert_eq!(source.requests(), total / page_size + 1);
        }

        /// A source paging differently from the merger never yields duplicates
        #[test]
        fn mismatched_page_sizes_merge_each_record_once(
            total in 0usize..500,
            source_page in 1usize..80,
            page_size in 1usize..80,
        ) {
            let items: Vec<usize> = (0..total).collect();
            let source = VecPageSource::new(items.clone(), source_page);
            let all = fetch_all(&source, page_size).unwrap();

            if source_page >= page_size {
                prop_assert_eq!(all, items);
            } else {
                // A short first page ends the fetch
                prop_assert_eq!(all.len(), total.min(source_page));
                prop_assert!(all.iter().enumerate().all(|(i, item)| i == *item));
            }
        }
    }
}
