//! Pure pagination math shared by both paginator variants.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::error::PaginationError;

/// A requested cursor transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMove {
    /// Advance one page, wrapping from the last page to the first.
    Next,
    /// Go back one page, wrapping from the first page to the last.
    Previous,
    /// Jump to a zero-based page index.
    Select(usize),
}

/// Apply a move to a zero-based index over `total` pages.
///
/// `Next` and `Previous` wrap around; `Select` must name a valid index.
pub fn step(current: usize, total: usize, page_move: PageMove) -> Result<usize, PaginationError> {
    if total == 0 {
        return Err(PaginationError::EmptyPages);
    }

    let current = current.min(total - 1);
    match page_move {
        PageMove::Next => Ok((current + 1) % total),
        PageMove::Previous => Ok((current + total - 1) % total),
        PageMove::Select(index) if index < total => Ok(index),
        PageMove::Select(index) => Err(PaginationError::OutOfRange { index, total }),
    }
}

/// Zero-based cursor over a fixed, non-empty page count.
///
/// The index is atomic so readers such as `current_index()` never wait on a
/// transition in progress. Writers are serialized by the owning paginator's
/// `in_flight` lock, which guards the move-render-deliver sequence as a whole.
#[derive(Debug)]
pub struct Cursor {
    index: AtomicUsize,
    total: usize,
}

impl Cursor {
    /// Create a cursor positioned on the first page.
    pub fn new(total: usize) -> Result<Self, PaginationError> {
        if total == 0 {
            return Err(PaginationError::EmptyPages);
        }

        Ok(Self {
            index: AtomicUsize::new(0),
            total,
        })
    }

    /// Current zero-based index.
    pub fn index(&self) -> usize {
        self.index.load(Ordering::Acquire)
    }

    /// Number of pages this cursor spans.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Apply a move and store the resulting index.
    ///
    /// The load/store pair is not atomic as a whole. Callers must hold the
    /// paginator's `in_flight` lock so no other move interleaves.
    pub fn apply(&self, page_move: PageMove) -> Result<usize, PaginationError> {
        let next = step(self.index(), self.total, page_move)?;
        self.index.store(next, Ordering::Release);
        Ok(next)
    }
}

/// Compute the number of pages for a paginated list.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}

/// Return start/end indices for a one-based page window.
pub fn page_window(total_items: usize, per_page: usize, page: usize) -> (usize, usize) {
    let safe_per_page = per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(safe_per_page);
    let end = (start + safe_per_page).min(total_items);
    (start.min(total_items), end)
}

/// Split items into pre-computed pages of at most `per_page` entries.
pub fn chunk_pages<T: Clone>(items: &[T], per_page: usize) -> Vec<Vec<T>> {
    (1..=total_pages(items.len(), per_page))
        .map(|page| {
            let (start, end) = page_window(items.len(), per_page, page);
            items[start..end].to_vec()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_from_last_to_first() {
        assert_eq!(step(0, 3, PageMove::Next).unwrap(), 1);
        assert_eq!(step(2, 3, PageMove::Next).unwrap(), 0);
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        assert_eq!(step(1, 3, PageMove::Previous).unwrap(), 0);
        assert_eq!(step(0, 3, PageMove::Previous).unwrap(), 2);
    }

    #[test]
    fn single_page_stays_put() {
        assert_eq!(step(0, 1, PageMove::Next).unwrap(), 0);
        assert_eq!(step(0, 1, PageMove::Previous).unwrap(), 0);
    }

    #[test]
    fn next_and_previous_are_inverse_everywhere() {
        for total in 1..=7 {
            for start in 0..total {
                let forward = step(start, total, PageMove::Next).unwrap();
                assert_eq!(step(forward, total, PageMove::Previous).unwrap(), start);

                let back = step(start, total, PageMove::Previous).unwrap();
                assert_eq!(step(back, total, PageMove::Next).unwrap(), start);
            }
        }
    }

    #[test]
    fn select_ignores_current_position() {
        for current in 0..5 {
            assert_eq!(step(current, 5, PageMove::Select(2)).unwrap(), 2);
        }
    }

    #[test]
    fn select_past_end_is_rejected() {
        let err = step(0, 5, PageMove::Select(5)).unwrap_err();
        assert!(matches!(
            err,
            PaginationError::OutOfRange { index: 5, total: 5 }
        ));
        assert!(err.is_usage_error());
    }

    #[test]
    fn empty_sequences_cannot_be_paginated() {
        assert!(matches!(
            step(0, 0, PageMove::Next),
            Err(PaginationError::EmptyPages)
        ));
        assert!(matches!(Cursor::new(0), Err(PaginationError::EmptyPages)));
    }

    #[test]
    fn cursor_stays_in_bounds_over_long_walks() {
        let cursor = Cursor::new(4).unwrap();
        let moves = [
            PageMove::Previous,
            PageMove::Previous,
            PageMove::Next,
            PageMove::Select(3),
            PageMove::Next,
            PageMove::Next,
            PageMove::Previous,
        ];

        for page_move in moves.iter().cycle().take(50) {
            let index = cursor.apply(*page_move).unwrap();
            assert!(index < cursor.total());
            assert_eq!(index, cursor.index());
        }
    }

    #[test]
    fn chunk_pages_keeps_order_and_remainder() {
        let items: Vec<u32> = (1..=12).collect();
        let pages = chunk_pages(&items, 5);

        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0], vec![1, 2, 3, 4, 5]);
        assert_eq!(pages[2], vec![11, 12]);
        assert!(chunk_pages::<u32>(&[], 5).is_empty());
    }

    #[test]
    fn page_window_clamps_to_item_count() {
        assert_eq!(page_window(12, 5, 3), (10, 12));
        assert_eq!(page_window(12, 5, 9), (12, 12));
        assert_eq!(total_pages(12, 0), 12);
    }
}
