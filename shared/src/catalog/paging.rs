//! Page-batched loading ("load more")

/// Products rendered per "load more" batch
pub const PAGE_SIZE: usize = 6;

/// One "load more" step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch<'a, T> {
    /// Next contiguous slice of the filtered subset
    pub items: &'a [T],
    /// Index of `items[0]` in the filtered subset
    pub start: usize,
    /// The load-more control must be hidden (slice reached the end)
    pub exhausted: bool,
    /// Filtered subset is empty on the first page: show the empty-state message
    pub empty: bool,
}

/// Zero-based page cursor over a filtered subset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page: usize,
    page_size: usize,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl PageCursor {
    /// `page_size` is clamped to at least 1
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn reset(&mut self) {
        self.page = 0;
    }

    /// Take the next slice of `items` and advance the cursor
    ///
    /// An empty subset on the first page reports `empty` and leaves the cursor
    /// where it is.
    pub fn next_batch<'a, T>(&mut self, items: &'a [T]) -> Batch<'a, T> {
        if items.is_empty() && self.page == 0 {
            return Batch {
                items,
                start: 0,
                exhausted: true,
                empty: true,
            };
        }

        let start = (self.page * self.page_size).min(items.len());
        let end = (start + self.page_size).min(items.len());
        self.page += 1;

        Batch {
            items: &items[start..end],
            start,
            exhausted: end >= items.len(),
            empty: false,
        }
    }
}
