use crate::catalog::Product;
use crate::ui::mvi::UiState;
use crate::ui::query::intent::SortSpec;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Record set plus the view parameters that select what is on screen.
///
/// `filtered` holds indices into `all`, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    pub(super) all: Vec<Product>,
    pub(super) filtered: Vec<usize>,
    /// 1-based. Always within `1..=max(1, total_pages())`.
    pub(super) page: usize,
    /// Never zero.
    pub(super) page_size: usize,
    pub(super) sort: Option<SortSpec>,
    pub(super) search_term: String,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl UiState for QueryState {}

impl QueryState {
    /// Empty state with the given page size. Zero falls back to the default.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            all: Vec::new(),
            filtered: Vec::new(),
            page: 1,
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
            sort: None,
            search_term: String::new(),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Size of the whole record set.
    pub fn record_count(&self) -> usize {
        self.all.len()
    }

    /// Number of products matching the current search.
    pub fn total_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    /// `ceil(total_count / page_size)`; zero when nothing matches.
    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size)
    }

    /// Matching products in display order.
    pub fn filtered_products(&self) -> impl Iterator<Item = &Product> + '_ {
        self.filtered.iter().map(move |&idx| &self.all[idx])
    }

    /// Products on the current page. At most `page_size` long.
    pub fn visible_slice(&self) -> Vec<&Product> {
        let start = (self.page - 1).saturating_mul(self.page_size);
        self.filtered
            .iter()
            .skip(start)
            .take(self.page_size)
            .map(|&idx| &self.all[idx])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_first_page() {
        let state = QueryState::default();
        assert_eq!(state.page(), 1);
        assert_eq!(state.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(state.total_pages(), 0);
        assert!(state.visible_slice().is_empty());
        assert!(state.sort().is_none());
    }

    #[test]
    fn zero_page_size_falls_back_to_default() {
        assert_eq!(QueryState::with_page_size(0).page_size(), DEFAULT_PAGE_SIZE);
    }
}
