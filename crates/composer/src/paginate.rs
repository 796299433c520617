//! Fixed-capacity page layout

use crate::schema::{Page, Sequenced};
use std::num::NonZeroUsize;

/// Number of pages needed for `len` items; never less than one
pub fn page_count(len: usize, capacity: NonZeroUsize) -> usize {
    len.div_ceil(capacity.get()).max(1)
}

/// Split items into pages of at most `capacity` items.
///
/// Items keep their global 1-based sequence number across pages. Empty input
/// still yields one page so the document has a header and footer to print.
/// The last page is the summary page.
pub fn paginate<T>(items: impl IntoIterator<Item = T>, capacity: NonZeroUsize) -> Vec<Page<T>> {
    let items: Vec<T> = items.into_iter().collect();
    let per_page = capacity.get();
    let total_pages = page_count(items.len(), capacity);

    let mut pages: Vec<Page<T>> = (1..=total_pages)
        .map(|index| Page {
            index,
            total_pages,
            items: Vec::with_capacity(per_page.min(items.len())),
            is_summary_page: index == total_pages,
        })
        .collect();

    for (i, item) in items.into_iter().enumerate() {
        pages[i / per_page].items.push(Sequenced { seq: i + 1, item });
    }

    pages
}
