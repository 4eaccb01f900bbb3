use crate::ui::app::{App, LoadState};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, PRICE_TEXT, ROW_STRIPE, STATUS_ERROR};
use crate::view::{PageView, ProductRow};
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};
use ratatui::Frame;

const COLUMNS: [&str; 6] = ["ID", "Image", "Title", "Description", "Price ($)", "Category"];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app), header);
    frame.render_widget(Clear, body);

    let page = app.is_loaded().then(|| app.page_view());
    match app.load_state() {
        LoadState::Loading => draw_message(
            frame,
            body,
            vec![Line::from(Span::styled(
                "Loading products...",
                Style::default().fg(HEADER_TEXT),
            ))],
        ),
        LoadState::Failed { message, detail } => draw_message(
            frame,
            body,
            vec![
                Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    detail.clone(),
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
                )),
            ],
        ),
        LoadState::Loaded => {
            if let Some(page) = &page {
                draw_table(frame, body, page);
            }
        }
    }

    frame.render_widget(
        Footer::new().widget(page.as_ref().map(|page| &page.pagination), footer),
        footer,
    );
}

fn draw_table(frame: &mut Frame<'_>, area: Rect, page: &PageView) {
    if page.rows.is_empty() {
        draw_message(
            frame,
            area,
            vec![Line::from(Span::styled(
                "No products match the search",
                Style::default().fg(HEADER_TEXT),
            ))],
        );
        return;
    }

    let header = Row::new(COLUMNS.iter().map(|title| Cell::from(*title)))
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));

    let rows = page
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| table_row(row, idx % 2 == 1));

    let widths = [
        Constraint::Length(5),
        Constraint::Percentage(22),
        Constraint::Percentage(22),
        Constraint::Fill(1),
        Constraint::Length(10),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(table, area);
}

fn table_row(row: &ProductRow, striped: bool) -> Row<'static> {
    let text = Style::default().fg(HEADER_TEXT);
    // Descriptions can span several lines; the table shows one.
    let description = row.description.replace(['\n', '\r'], " ");

    let cells = vec![
        Cell::from(row.id.to_string()).style(text),
        Cell::from(row.image.to_string()).style(text.add_modifier(Modifier::DIM)),
        Cell::from(row.title.clone()).style(text.add_modifier(Modifier::BOLD)),
        Cell::from(description).style(text),
        Cell::from(row.price.clone()).style(Style::default().fg(PRICE_TEXT)),
        Cell::from(row.category.clone()).style(text),
    ];

    let row_widget = Row::new(cells);
    if striped {
        row_widget.style(Style::default().bg(ROW_STRIPE))
    } else {
        row_widget
    }
}

fn draw_message(frame: &mut Frame<'_>, area: Rect, lines: Vec<Line<'static>>) {
    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let height = lines.len() as u16;
    let rect = centered_rect_by_size(area, width.saturating_add(4), height.saturating_add(2));
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(widget, rect);
}
