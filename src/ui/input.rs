use crate::ui::app::{App, InputMode};
use crate::ui::query::{QueryIntent, SortField, SortOrder};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.input_mode() == InputMode::Search {
        handle_search_key(app, key);
        return;
    }

    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
        app.request_quit();
        return;
    }

    // Nothing to navigate until the catalog is in.
    if !app.is_loaded() {
        return;
    }

    if is_ctrl_char(key, 'u') {
        app.clear_search();
        return;
    }

    match key.code {
        KeyCode::Char('/') => app.enter_search_mode(),
        KeyCode::Char('p') => app.sort_by(SortField::Price, SortOrder::Asc),
        KeyCode::Char('P') => app.sort_by(SortField::Price, SortOrder::Desc),
        KeyCode::Char('n') => app.sort_by(SortField::Name, SortOrder::Asc),
        KeyCode::Char('N') => app.sort_by(SortField::Name, SortOrder::Desc),
        KeyCode::Left | KeyCode::Char('h') => app.dispatch(QueryIntent::PrevPage),
        KeyCode::Right | KeyCode::Char('l') => app.dispatch(QueryIntent::NextPage),
        KeyCode::Home | KeyCode::Char('g') => app.dispatch(QueryIntent::FirstPage),
        KeyCode::End | KeyCode::Char('G') => app.dispatch(QueryIntent::LastPage),
        KeyCode::Char('+') | KeyCode::Char('=') => app.cycle_page_size(1),
        KeyCode::Char('-') => app.cycle_page_size(-1),
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'u') {
        app.clear_search();
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.leave_search_mode(),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_search_char(ch)
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
