use serde::Serialize;

pub const PAGE_SIZE: usize = 20;

/// One fixed-size slice of a result list. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: usize,
}

impl<T> Page<T> {
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_items: self.total_items,
            total_pages: self.total_pages,
            current_page: self.current_page,
            page_size: self.page_size,
        }
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }
}

/// Slices `list` without clamping: page 0 or a page past the end yields no
/// items, while the totals still describe the whole list.
pub fn paginate<T: Clone>(list: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = list.len();
    let total_pages = total_items.div_ceil(page_size);

    let items = if page == 0 {
        Vec::new()
    } else {
        let start = (page - 1).saturating_mul(page_size);
        list.iter().skip(start).take(page_size).cloned().collect()
    };

    Page {
        items,
        total_items,
        total_pages,
        current_page: page,
        page_size,
    }
}
