use crate::ui::app::{App, InputMode};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const SEARCH_HINT: &str = "press / to search";

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let dim_style = text_style.add_modifier(Modifier::DIM);
        let searching = app.input_mode() == InputMode::Search;

        let mut spans = vec![Span::styled("  Search: ", text_style)];
        if app.search_input().is_empty() && !searching {
            spans.push(Span::styled(SEARCH_HINT, dim_style));
        } else {
            let style = if searching {
                Style::default().fg(ACCENT)
            } else {
                text_style
            };
            spans.push(Span::styled(app.search_input().to_string(), style));
        }
        if searching {
            spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
        }

        spans.push(Span::styled("  │  ", separator_style));
        let sort = app
            .query()
            .sort()
            .map(|spec| spec.to_string())
            .unwrap_or_else(|| "none".to_string());
        spans.push(Span::styled(format!("Sort: {}", sort), text_style));

        if app.is_loaded() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!(
                    "{} of {} products",
                    app.query().total_count(),
                    app.query().record_count()
                ),
                text_style,
            ));
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("{} per page", app.query().page_size()),
                text_style,
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
