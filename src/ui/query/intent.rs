use crate::catalog::Product;
use crate::ui::mvi::Intent;
use std::fmt;

/// Column a sort applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Price,
    /// Product title, compared case-insensitively.
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// The active sort, reapplied after every search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = match self.field {
            SortField::Price => "price",
            SortField::Name => "name",
        };
        let arrow = match self.order {
            SortOrder::Asc => "↑",
            SortOrder::Desc => "↓",
        };
        write!(f, "{} {}", field, arrow)
    }
}

#[derive(Debug, Clone)]
pub enum QueryIntent {
    /// Replace the record set. Clears search and sort, back to page 1.
    Load { products: Vec<Product> },
    /// Filter titles by `term` (case-insensitive); empty term shows everything.
    Search { term: String },
    Sort { field: SortField, order: SortOrder },
    /// Zero is ignored.
    SetPageSize { size: usize },
    /// Out-of-range pages are ignored.
    GoToPage { page: usize },
    FirstPage,
    PrevPage,
    NextPage,
    LastPage,
}

impl Intent for QueryIntent {}
