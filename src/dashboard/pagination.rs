use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    total_pages: usize,
    rows_per_page: usize,
    row_count: usize,
}

impl Pagination {
    pub fn new(row_count: usize, rows_per_page: usize) -> Self {
        let rows_per_page = rows_per_page.max(1);
        Self {
            current_page: 1,
            total_pages: row_count.div_ceil(rows_per_page),
            rows_per_page,
            row_count,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Row indices shown on the current page.
    pub fn window(&self) -> Range<usize> {
        let start = ((self.current_page - 1) * self.rows_per_page).min(self.row_count);
        let end = (start + self.rows_per_page).min(self.row_count);
        start..end
    }

    pub fn prev_disabled(&self) -> bool {
        self.current_page <= 1
    }

    pub fn next_disabled(&self) -> bool {
        self.current_page >= self.total_pages
    }

    /// Returns whether the page changed.
    pub fn prev(&mut self) -> bool {
        if self.prev_disabled() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    pub fn next(&mut self) -> bool {
        if self.next_disabled() {
            return false;
        }
        self.current_page += 1;
        true
    }
}
