//! List view filtering and pagination.
//!
//! [`ListView`] holds the operator-controlled view state (name filter, page
//! number, page size) and derives the visible window over a visitor
//! collection it never owns. Every read is a pure recomputation, so the
//! view cannot drift out of sync with the collection; at the expected
//! collection sizes (hundreds of rows) there is nothing worth caching.

use crate::error::CoreError;
use crate::visitor::Visitor;

/// Supported page sizes for the visitor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Ten,
    TwentyFive,
    Fifty,
    Hundred,
}

impl PageSize {
    /// Number of rows per page.
    pub fn rows(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Ten
    }
}

impl TryFrom<u32> for PageSize {
    type Error = CoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(PageSize::Ten),
            25 => Ok(PageSize::TwentyFive),
            50 => Ok(PageSize::Fifty),
            100 => Ok(PageSize::Hundred),
            other => Err(CoreError::Validation(format!(
                "Unsupported page size {other}. Must be one of: 10, 25, 50, 100"
            ))),
        }
    }
}

/// Row window summary for the "Showing X-Y of Z" line and pager label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based index of the first visible row; 0 when nothing matches.
    pub first_row: usize,
    /// 1-based index of the last visible row; 0 when nothing matches.
    pub last_row: usize,
    /// Total rows matching the filter.
    pub total_rows: usize,
    /// Page currently displayed (already clamped).
    pub page: u32,
    /// Total pages; at least 1 even for an empty result.
    pub total_pages: u32,
}

/// Operator view state over the visitor collection.
#[derive(Debug, Clone)]
pub struct ListView {
    query: String,
    page: u32,
    page_size: PageSize,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ListView {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            page: 1,
            page_size: PageSize::default(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The requested page. Derivations clamp to `[1, total_pages]`, so the
    /// displayed page can be lower after the collection shrinks.
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Replace the search query and reset to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Replace the page size and reset to the first page.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 1;
    }

    /// Jump to `page`.
    ///
    /// Out-of-range targets are rejected, not clamped: paging controls
    /// disable navigation beyond the bounds, so a rejected call means the
    /// caller bypassed that contract.
    pub fn go_to_page(&mut self, page: u32, filtered_count: usize) -> Result<(), CoreError> {
        let total = Self::total_pages(filtered_count, self.page_size);
        if page == 0 || page > total {
            return Err(CoreError::Validation(format!(
                "Page {page} out of range 1..={total}"
            )));
        }
        self.page = page;
        Ok(())
    }

    /// Whether a "previous page" control should be enabled.
    pub fn can_go_prev(&self, filtered_count: usize) -> bool {
        self.effective_page(filtered_count) > 1
    }

    /// Whether a "next page" control should be enabled.
    pub fn can_go_next(&self, filtered_count: usize) -> bool {
        self.effective_page(filtered_count) < Self::total_pages(filtered_count, self.page_size)
    }

    /// Total pages for a filtered count; at least 1 even when empty.
    pub fn total_pages(filtered_count: usize, page_size: PageSize) -> u32 {
        let pages = filtered_count.div_ceil(page_size.rows());
        pages.max(1) as u32
    }

    /// The page actually displayed: the requested page clamped to
    /// `[1, total_pages]`.
    pub fn effective_page(&self, filtered_count: usize) -> u32 {
        self.page
            .clamp(1, Self::total_pages(filtered_count, self.page_size))
    }

    /// Visitors matching the current query, in collection order.
    ///
    /// Case-insensitive substring match against the visitor name only.
    pub fn filtered<'a>(&self, visitors: &'a [Visitor]) -> Vec<&'a Visitor> {
        if self.query.is_empty() {
            return visitors.iter().collect();
        }
        let needle = self.query.to_lowercase();
        visitors
            .iter()
            .filter(|v| v.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// The rows visible on the current page.
    pub fn visible_slice<'a>(&self, visitors: &'a [Visitor]) -> Vec<&'a Visitor> {
        let filtered = self.filtered(visitors);
        let rows = self.page_size.rows();
        let start = (self.effective_page(filtered.len()) as usize - 1) * rows;
        filtered.into_iter().skip(start).take(rows).collect()
    }

    /// Window summary for the current derivation.
    pub fn window(&self, filtered_count: usize) -> PageWindow {
        let rows = self.page_size.rows();
        let page = self.effective_page(filtered_count);
        let start = (page as usize - 1) * rows;
        let (first_row, last_row) = if filtered_count == 0 {
            (0, 0)
        } else {
            (start + 1, (start + rows).min(filtered_count))
        };
        PageWindow {
            first_row,
            last_row,
            total_rows: filtered_count,
            page,
            total_pages: Self::total_pages(filtered_count, self.page_size),
        }
    }
}
