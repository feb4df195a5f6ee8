//! Fixed-size page slicing.
//!
//! The paginator only slices and reports metadata. Keeping the requested
//! page in range is the session's job.

/// One page of a working set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items on this page, in working-set order. Empty when nothing matches
    /// or the page is out of range.
    pub items: &'a [T],
    /// Number of pages; 0 for an empty working set.
    pub page_count: usize,
    /// The 1-based page these items belong to.
    pub page: usize,
    /// Working-set position of `items[0]`.
    pub first_index: usize,
}

impl<T> Page<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1 && self.page_count > 0
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }

    /// Items paired with their working-set position.
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &T)> {
        self.items
            .iter()
            .enumerate()
            .map(|(offset, item)| (self.first_index + offset, item))
    }
}

/// Slice `items` into page `page` (1-based) of `page_size` items.
///
/// ```
/// use romshelf_core::paginate::paginate;
///
/// let items: Vec<u32> = (1..=7).collect();
/// let page = paginate(&items, 3, 3);
/// assert_eq!(page.items, &[7]);
/// assert_eq!(page.page_count, 3);
///
/// assert!(paginate(&items, 4, 3).items.is_empty());
/// ```
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_count = if page_size == 0 {
        0
    } else {
        items.len().div_ceil(page_size)
    };

    let start = page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(page_size))
        .filter(|&start| start < items.len());
    let slice = match start {
        Some(start) => {
            let end = start.saturating_add(page_size).min(items.len());
            &items[start..end]
        }
        None => &items[..0],
    };

    Page {
        items: slice,
        page_count,
        page,
        first_index: start.unwrap_or(0),
    }
}
