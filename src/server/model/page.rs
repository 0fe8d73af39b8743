use crate::model::pagination::PaginationDto;

/// Default page size when the client sends none.
pub const DEFAULT_PAGE_LIMIT: u64 = 10;

/// One page of results together with the total item count.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    /// 1-based page number.
    pub page: u64,
    pub limit: u64,
}

impl<T> Page<T> {
    /// Maps every item, keeping the pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            0
        } else {
            self.total.div_ceil(self.limit)
        }
    }

    pub fn pagination(&self) -> PaginationDto {
        PaginationDto {
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages(),
        }
    }
}
