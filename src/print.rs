//! Non-interactive mode: fetch, apply the query, print one page as text.

use std::io::{self, Write};

use anyhow::anyhow;

use crate::catalog::ProductClient;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::query::QueryIntent;
use crate::ui::Presets;
use crate::view::{ImageResolver, PageView, ProductRow};

const TITLE_WIDTH: usize = 32;
const DESCRIPTION_WIDTH: usize = 48;
const CATEGORY_WIDTH: usize = 16;
const IMAGE_WIDTH: usize = 48;

pub fn run(config: &Config, presets: &Presets, page: usize) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let client = ProductClient::new(&config.source)?;
    let products = runtime
        .block_on(client.fetch_products())
        .map_err(|err| anyhow!("{}: {}", err.user_message(), err))?;

    let images = ImageResolver::new(config.images.blocklist.clone());
    let mut app = App::new(&config.view, images);
    app.on_loaded(Ok(products));
    presets.apply(&mut app);
    if let Some(note) = page_out_of_range(page, app.query().total_pages()) {
        tracing::warn!(page, "{}", note);
        eprintln!("{}", note);
    }
    app.dispatch(QueryIntent::GoToPage { page });

    let mut stdout = io::stdout().lock();
    stdout.write_all(render_text(&app.page_view()).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Note for a requested page the result does not have; the first page is
/// printed instead.
fn page_out_of_range(page: usize, total_pages: usize) -> Option<String> {
    let last = total_pages.max(1);
    if (1..=last).contains(&page) {
        return None;
    }
    Some(format!("Page {} is out of range (1-{}), showing page 1", page, last))
}

/// Aligned plain-text table followed by the pagination summary.
pub fn render_text(page: &PageView) -> String {
    let header = ["ID", "Title", "Price", "Category", "Description", "Image"]
        .map(str::to_string);
    let rows: Vec<[String; 6]> = page.rows.iter().map(text_cells).collect();

    let mut widths = header.clone().map(|cell| cell.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &header, &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    if rows.is_empty() {
        out.push_str("No products match the search\n");
    }
    out.push('\n');
    out.push_str(&page.pagination.summary());
    out.push('\n');
    out
}

fn text_cells(row: &ProductRow) -> [String; 6] {
    [
        row.id.to_string(),
        truncate(&row.title, TITLE_WIDTH),
        row.price.clone(),
        truncate(&row.category, CATEGORY_WIDTH),
        truncate(&row.description.replace(['\n', '\r'], " "), DESCRIPTION_WIDTH),
        truncate(&row.image.to_string(), IMAGE_WIDTH),
    ]
}

fn push_line(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let line = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
