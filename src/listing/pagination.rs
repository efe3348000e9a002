pub const DEFAULT_PAGE_SIZE: usize = 4;

/// Current page over a list of `count` items. Pages are 1-indexed and every
/// move is clamped to `1..=total_pages`, nothing wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    page_size: usize,
    count: usize,
}

impl Paginator {
    pub fn new(count: usize, page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            count,
        }
    }

    /// Jumps to `page`, clamped into the valid range.
    pub fn at(mut self, page: usize) -> Self {
        self.page = page.clamp(1, self.total_pages().max(1));
        self
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn total_pages(&self) -> usize {
        self.count.div_ceil(self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn next(&mut self) -> usize {
        if self.has_next() {
            self.page += 1;
        }
        self.page
    }

    pub fn previous(&mut self) -> usize {
        if self.has_previous() {
            self.page -= 1;
        }
        self.page
    }

    /// The items that belong on the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page - 1) * self.page_size;
        let end = (start + self.page_size).min(items.len());
        items.get(start..end).unwrap_or_default()
    }
}

#[test]
fn empty_list_has_no_pages() {
    let paginator = Paginator::new(0, DEFAULT_PAGE_SIZE).at(3);
    assert_eq!(paginator.total_pages(), 0);
    assert_eq!(paginator.page(), 1);
    assert!(!paginator.has_next());
    assert!(!paginator.has_previous());
    assert!(paginator.slice::<u8>(&[]).is_empty());
}

#[test]
fn zero_page_size_falls_back_to_one() {
    let paginator = Paginator::new(3, 0);
    assert_eq!(paginator.page_size(), 1);
    assert_eq!(paginator.total_pages(), 3);
}
