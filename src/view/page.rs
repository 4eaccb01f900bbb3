use crate::catalog::Product;
use crate::ui::query::QueryState;
use crate::view::image::{ImageRef, ImageResolver};

pub const MISSING_DESCRIPTION: &str = "No description";
pub const MISSING_CATEGORY: &str = "N/A";

/// One table row, every cell already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub id: i64,
    pub image: ImageRef,
    pub title: String,
    pub description: String,
    pub price: String,
    pub category: String,
}

impl ProductRow {
    pub fn from_product(product: &Product, images: &ImageResolver) -> Self {
        Self {
            id: product.id,
            image: images.resolve(&product.images, product.category.as_ref(), &product.title),
            title: product.title.clone(),
            description: product
                .description
                .clone()
                .unwrap_or_else(|| MISSING_DESCRIPTION.to_string()),
            price: format_price(product.price),
            category: product
                .category
                .as_ref()
                .map(|category| category.name.clone())
                .unwrap_or_else(|| MISSING_CATEGORY.to_string()),
        }
    }
}

/// A navigation affordance: the page it leads to and whether it is usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButton {
    pub target: usize,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub first: NavButton,
    pub prev: NavButton,
    pub next: NavButton,
    pub last: NavButton,
}

impl Pagination {
    pub fn from_state(state: &QueryState) -> Self {
        let current_page = state.page();
        let total_pages = state.total_pages();
        let at_start = current_page <= 1;
        let at_end = current_page >= total_pages;

        Self {
            current_page,
            total_pages,
            total_count: state.total_count(),
            first: NavButton {
                target: 1,
                enabled: !at_start,
            },
            prev: NavButton {
                target: current_page.saturating_sub(1).max(1),
                enabled: !at_start,
            },
            next: NavButton {
                target: current_page + 1,
                enabled: !at_end,
            },
            last: NavButton {
                target: total_pages.max(1),
                enabled: !at_end,
            },
        }
    }

    /// `Page 2 / 3 (25 products)`. An empty result still reads as page 1 of 1.
    pub fn summary(&self) -> String {
        format!(
            "Page {} / {} ({} products)",
            self.current_page,
            self.total_pages.max(1),
            self.total_count
        )
    }
}

/// Everything needed to draw the current page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub rows: Vec<ProductRow>,
    pub pagination: Pagination,
}

impl PageView {
    pub fn build(state: &QueryState, images: &ImageResolver) -> Self {
        let rows = state
            .visible_slice()
            .into_iter()
            .map(|product| ProductRow::from_product(product, images))
            .collect();

        Self {
            rows,
            pagination: Pagination::from_state(state),
        }
    }
}

/// `$90`, `$12.5`: whole prices print without a fraction.
pub fn format_price(price: f64) -> String {
    format!("${}", price)
}
