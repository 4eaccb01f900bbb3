//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use product_browser::catalog::Product;
use product_browser::config::SourceConfig;
use product_browser::ui::mvi::Reducer;
use product_browser::ui::query::{QueryIntent, QueryReducer, QueryState};
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

// -- Products -----------------------------------------------------------------

pub fn product(id: i64, title: &str, price: f64) -> Product {
    Product {
        id,
        title: title.to_string(),
        description: None,
        price,
        category: None,
        images: Vec::new(),
    }
}

/// Products with ids 1..=n, in the given title order, price 1.0 each.
pub fn products_titled(titles: &[&str]) -> Vec<Product> {
    titles
        .iter()
        .enumerate()
        .map(|(idx, title)| product(idx as i64 + 1, title, 1.0))
        .collect()
}

/// `count` products with ids 1..=count and prices that are not monotonic.
pub fn numbered_products(count: usize) -> Vec<Product> {
    (1..=count)
        .map(|id| {
            let price = ((id * 37) % 101) as f64 + 0.5;
            product(id as i64, &format!("Product {:02}", id), price)
        })
        .collect()
}

// -- Query state --------------------------------------------------------------

pub fn loaded(products: Vec<Product>, page_size: usize) -> QueryState {
    QueryReducer::reduce(
        QueryState::with_page_size(page_size),
        QueryIntent::Load { products },
    )
}

/// Fold a sequence of intents into `state`.
pub fn reduce_all(state: QueryState, intents: Vec<QueryIntent>) -> QueryState {
    intents.into_iter().fold(state, QueryReducer::reduce)
}

pub fn titles(state: &QueryState) -> Vec<String> {
    state.filtered_products().map(|p| p.title.clone()).collect()
}

pub fn ids(state: &QueryState) -> Vec<i64> {
    state.filtered_products().map(|p| p.id).collect()
}

// -- Network ------------------------------------------------------------------

/// A port nothing is listening on (bound, then released).
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

// -- Config -------------------------------------------------------------------

/// Write `content` to a temp `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn source_for(url: &str, timeout_seconds: u32) -> SourceConfig {
    SourceConfig {
        url: url.to_string(),
        timeout_seconds,
        connect_timeout_seconds: 2,
    }
}
