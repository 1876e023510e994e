use super::*;
use kf_core::PAGE_SIZE;
use serde::Serialize;

/// One page of a filtered, ordered listing set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<'a> {
    pub items: Vec<&'a Listing>,
    /// 1-based, clamped to the last page.
    pub page: usize,
    pub pages: usize,
    pub total: usize,
    pub size: usize,
}

/// Browsing state for one marketplace tab. Changing the filter or the
/// ordering sends the user back to the first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Browse {
    filter: Filter,
    sort: Sort,
    page: usize,
}

impl Default for Browse {
    fn default() -> Self {
        Self {
            filter: Filter::default(),
            sort: Sort::default(),
            page: 1,
        }
    }
}

impl Browse {
    pub fn new(filter: Filter, sort: Sort, page: usize) -> Self {
        Self {
            filter,
            sort,
            page: page.max(1),
        }
    }
    pub fn filter(&self) -> &Filter {
        &self.filter
    }
    pub fn sort(&self) -> Sort {
        self.sort
    }
    pub fn page(&self) -> usize {
        self.page
    }
    pub fn set_filter(&mut self, filter: Filter) {
        if filter != self.filter {
            self.filter = filter;
            self.page = 1;
        }
    }
    pub fn set_sort(&mut self, sort: Sort) {
        if sort != self.sort {
            self.sort = sort;
            self.page = 1;
        }
    }
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
    pub fn clear(&mut self) {
        self.set_filter(Filter::default());
    }

    pub fn view<'a>(&self, listings: &'a [Listing]) -> Page<'a> {
        let mut items = self.filter.apply(listings);
        self.sort.order(&mut items);
        let total = items.len();
        let pages = total.div_ceil(PAGE_SIZE).max(1);
        let page = self.page.min(pages);
        let items = items
            .into_iter()
            .skip((page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect();
        Page {
            items,
            page,
            pages,
            total,
            size: PAGE_SIZE,
        }
    }
}
