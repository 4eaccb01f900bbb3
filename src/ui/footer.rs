use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use crate::view::{NavButton, Pagination};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = "/: Search │ p/P: Price │ n/N: Name │ +/-: Page size │ q: Quit";

pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, pagination: Option<&Pagination>, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let dim_style = text_style.add_modifier(Modifier::DIM);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::raw(" ")];
        if let Some(pagination) = pagination {
            spans.push(nav_span("⏮ Home", pagination.first, text_style, dim_style));
            spans.push(Span::raw("  "));
            spans.push(nav_span("◀ Prev", pagination.prev, text_style, dim_style));
            spans.push(Span::raw("  "));
            spans.push(Span::styled(pagination.summary(), text_style));
            spans.push(Span::raw("  "));
            spans.push(nav_span("Next ▶", pagination.next, text_style, dim_style));
            spans.push(Span::raw("  "));
            spans.push(nav_span("End ⏭", pagination.last, text_style, dim_style));
            spans.push(Span::styled("  │  ", separator_style));
        }
        spans.push(Span::styled(HINTS, dim_style));

        let version = format!("v{} ", VERSION);
        // Char count, not bytes, for the arrows and separators.
        let used: usize = spans.iter().map(|span| span.content.chars().count()).sum();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(version.chars().count());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(version, dim_style));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

fn nav_span(
    label: &'static str,
    button: NavButton,
    enabled: Style,
    disabled: Style,
) -> Span<'static> {
    if button.enabled {
        Span::styled(label, enabled)
    } else {
        Span::styled(label, disabled)
    }
}
