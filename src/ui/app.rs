use crate::catalog::{LoadError, Product};
use crate::config::ViewConfig;
use crate::ui::mvi::Reducer;
use crate::ui::query::{QueryIntent, QueryReducer, QueryState, SortField, SortOrder};
use crate::view::{ImageResolver, PageView};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed { message: String, detail: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Keystrokes edit the search term.
    Search,
}

pub struct App {
    should_quit: bool,
    load: LoadState,
    mode: InputMode,
    /// Catalog query state (MVI pattern).
    query: QueryState,
    search_input: String,
    page_size_options: Vec<usize>,
    images: ImageResolver,
}

impl App {
    pub fn new(view: &ViewConfig, images: ImageResolver) -> Self {
        let mut page_size_options = view.page_size_options.clone();
        page_size_options.sort_unstable();
        page_size_options.dedup();

        Self {
            should_quit: false,
            load: LoadState::Loading,
            mode: InputMode::Normal,
            query: QueryState::with_page_size(view.page_size),
            search_input: String::new(),
            page_size_options,
            images,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_loaded(&self) -> bool {
        self.load == LoadState::Loaded
    }

    pub fn input_mode(&self) -> InputMode {
        self.mode
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Rows and pagination for the current page.
    pub fn page_view(&self) -> PageView {
        PageView::build(&self.query, &self.images)
    }

    /// Called once with the result of the startup fetch.
    pub fn on_loaded(&mut self, result: Result<Vec<Product>, LoadError>) {
        match result {
            Ok(products) => {
                self.load = LoadState::Loaded;
                self.dispatch(QueryIntent::Load { products });
            }
            Err(err) => {
                self.load = LoadState::Failed {
                    message: err.user_message().to_string(),
                    detail: err.to_string(),
                };
            }
        }
    }

    /// Dispatch an intent to the query reducer.
    pub fn dispatch(&mut self, intent: QueryIntent) {
        tracing::trace!(?intent, "query intent");
        dispatch_mvi!(self, query, QueryReducer, intent);
    }

    // ========================================================================
    // Search
    // ========================================================================

    pub fn enter_search_mode(&mut self) {
        self.mode = InputMode::Search;
    }

    pub fn leave_search_mode(&mut self) {
        self.mode = InputMode::Normal;
    }

    /// Replace the search term and filter immediately.
    pub fn apply_search(&mut self, term: &str) {
        self.search_input = term.to_string();
        self.run_search();
    }

    pub fn push_search_char(&mut self, ch: char) {
        self.search_input.push(ch);
        self.run_search();
    }

    pub fn pop_search_char(&mut self) {
        if self.search_input.pop().is_some() {
            self.run_search();
        }
    }

    pub fn clear_search(&mut self) {
        if !self.search_input.is_empty() {
            self.search_input.clear();
            self.run_search();
        }
    }

    fn run_search(&mut self) {
        let term = self.search_input.clone();
        self.dispatch(QueryIntent::Search { term });
    }

    // ========================================================================
    // Sort and pagination
    // ========================================================================

    pub fn sort_by(&mut self, field: SortField, order: SortOrder) {
        self.dispatch(QueryIntent::Sort { field, order });
    }

    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    /// Step to the next larger (`direction > 0`) or smaller configured page
    /// size. Stays put at either end.
    pub fn cycle_page_size(&mut self, direction: i32) {
        let current = self.query.page_size();
        let options = self.page_size_options.iter().copied();
        let next = if direction.is_negative() {
            options.filter(|&size| size < current).max()
        } else {
            options.filter(|&size| size > current).min()
        };
        if let Some(size) = next {
            self.dispatch(QueryIntent::SetPageSize { size });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_app() -> App {
        App::new(&ViewConfig::default(), ImageResolver::new(Vec::new()))
    }

    fn products(titles: &[&str]) -> Vec<Product> {
        titles
            .iter()
            .enumerate()
            .map(|(idx, title)| Product {
                id: idx as i64 + 1,
                title: title.to_string(),
                description: None,
                price: 1.0,
                category: None,
                images: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn starts_loading() {
        let app = make_app();
        assert_eq!(app.load_state(), &LoadState::Loading);
        assert!(!app.is_loaded());
        assert_eq!(app.input_mode(), InputMode::Normal);
    }

    #[test]
    fn load_failure_keeps_message_and_detail() {
        let mut app = make_app();
        app.on_loaded(Err(LoadError::Status {
            url: "http://localhost/products".to_string(),
            status: 500,
        }));
        match app.load_state() {
            LoadState::Failed { message, detail } => {
                assert_eq!(message, "The product service returned an error");
                assert!(detail.contains("500"));
            }
            other => panic!("expected Failed, got {:?}", other),
        }
        assert_eq!(app.query().record_count(), 0);
    }

    #[test]
    fn typing_filters_on_every_keystroke() {
        let mut app = make_app();
        app.on_loaded(Ok(products(&["Blue Shirt", "Red Hat", "Shirt Deluxe"])));
        app.push_search_char('h');
        assert_eq!(app.query().total_count(), 3);
        app.push_search_char('a');
        assert_eq!(app.query().total_count(), 1);
        app.pop_search_char();
        assert_eq!(app.query().total_count(), 3);
        app.clear_search();
        assert_eq!(app.search_input(), "");
    }

    #[test]
    fn page_size_cycles_through_sorted_options() {
        let view = ViewConfig {
            page_size: 10,
            page_size_options: vec![20, 5, 10, 10],
        };
        let mut app = App::new(&view, ImageResolver::new(Vec::new()));
        assert_eq!(app.page_size_options(), &[5, 10, 20]);

        app.cycle_page_size(1);
        assert_eq!(app.query().page_size(), 20);
        app.cycle_page_size(1);
        assert_eq!(app.query().page_size(), 20);
        app.cycle_page_size(-1);
        app.cycle_page_size(-1);
        assert_eq!(app.query().page_size(), 5);
        app.cycle_page_size(-1);
        assert_eq!(app.query().page_size(), 5);
    }
}
