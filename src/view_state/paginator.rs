/// Paginator footer data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginatorView {
    pub page_index: usize,
    pub page_size: usize,
    pub page_count: Option<usize>,
    pub total_items: Option<usize>,
    /// Rows actually on screen, used when the total is unknown
    pub visible_rows: usize,
}

impl PaginatorView {
    /// Range label such as `4 – 6 of 10`.
    pub fn range_label(&self) -> String {
        let start = self.page_index * self.page_size;
        match self.total_items {
            Some(0) => "0 of 0".to_string(),
            Some(total) => {
                let end = if start < total {
                    (start + self.page_size).min(total)
                } else {
                    start + self.page_size
                };
                format!("{} – {} of {}", start + 1, end, total)
            }
            None if self.visible_rows == 0 => format!("page {}", self.page_index + 1),
            None => format!("{} – {}", start + 1, start + self.visible_rows),
        }
    }

    /// `Page 2 of 4`, or `Page 2` when the page count is unknown.
    pub fn page_label(&self) -> String {
        match self.page_count {
            Some(count) => format!("Page {} of {}", self.page_index + 1, count),
            None => format!("Page {}", self.page_index + 1),
        }
    }
}
