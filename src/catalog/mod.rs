//! Product catalog: the record type and the endpoint it is loaded from.

mod error;
mod product;
mod source;

pub use error::LoadError;
pub use product::{Category, CategoryRecord, Product, ProductRecord};
pub use source::ProductClient;
