use crate::shared::config::PagingConfig;
use serde::{Deserialize, Serialize};

/// Запрос страницы: номер (с нуля) и размер
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Self {
        Self { page, size }
    }

    pub fn first(size: usize) -> Self {
        Self::new(0, size)
    }

    /// Вся выборка одной страницей
    pub fn unpaged() -> Self {
        Self::new(0, usize::MAX)
    }

    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }

    /// Размер 0 заменяется размером по умолчанию, слишком большой обрезается
    pub fn normalized(self, paging: &PagingConfig) -> Self {
        let size = match self.size {
            0 => paging.default_page_size,
            size => size.min(paging.max_page_size),
        };
        Self::new(self.page, size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(PagingConfig::default().default_page_size)
    }
}

/// Страница результатов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub size: usize,
    /// Общее количество записей без учёта пагинации
    pub total: usize,
}

impl<T> Page<T> {
    /// Вырезать страницу из полной выборки
    pub fn from_all(all: Vec<T>, request: PageRequest) -> Self {
        let total = all.len();
        let items = all
            .into_iter()
            .skip(request.offset())
            .take(request.size)
            .collect();
        Self {
            items,
            page: request.page,
            size: request.size,
            total,
        }
    }

    pub fn total_pages(&self) -> usize {
        if self.size == 0 {
            0
        } else {
            self.total.div_ceil(self.size)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_requested_page() {
        let page = Page::from_all((1..=7).collect::<Vec<_>>(), PageRequest::new(1, 3));
        assert_eq!(page.items, vec![4, 5, 6]);
        assert_eq!(page.total, 7);
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let page = Page::from_all(vec![1, 2], PageRequest::new(5, 10));
        assert!(page.is_empty());
        assert_eq!(page.total, 2);
    }

    #[test]
    fn normalization_applies_paging_limits() {
        let paging = PagingConfig::default();
        assert_eq!(PageRequest::new(0, 0).normalized(&paging).size, 50);
        assert_eq!(PageRequest::new(2, 10_000).normalized(&paging).size, 500);
        assert_eq!(PageRequest::unpaged().offset(), 0);
    }
}
