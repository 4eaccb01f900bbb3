//! Projection of the query state into display rows and a pagination bar.
//! Holds no state of its own.

mod image;
mod page;

pub use image::{ImageRef, ImageResolver};
pub use page::{
    format_price, NavButton, PageView, Pagination, ProductRow, MISSING_CATEGORY,
    MISSING_DESCRIPTION,
};
