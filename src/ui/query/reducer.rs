use crate::catalog::Product;
use crate::ui::mvi::Reducer;
use crate::ui::query::intent::{QueryIntent, SortField, SortOrder, SortSpec};
use crate::ui::query::state::QueryState;
use std::cmp::Ordering;

pub struct QueryReducer;

impl Reducer for QueryReducer {
    type State = QueryState;
    type Intent = QueryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            QueryIntent::Load { products } => {
                let filtered = (0..products.len()).collect();
                QueryState {
                    all: products,
                    filtered,
                    page: 1,
                    page_size: state.page_size,
                    sort: None,
                    search_term: String::new(),
                }
            }
            QueryIntent::Search { term } => {
                let mut filtered = search(&state.all, &term);
                if let Some(spec) = state.sort {
                    sort_indices(&state.all, &mut filtered, spec);
                }
                QueryState {
                    filtered,
                    page: 1,
                    search_term: term,
                    ..state
                }
            }
            QueryIntent::Sort { field, order } => {
                let spec = SortSpec::new(field, order);
                let mut filtered = state.filtered;
                sort_indices(&state.all, &mut filtered, spec);
                QueryState {
                    filtered,
                    page: 1,
                    sort: Some(spec),
                    ..state
                }
            }
            QueryIntent::SetPageSize { size } => {
                if size == 0 {
                    return state;
                }
                QueryState {
                    page_size: size,
                    page: 1,
                    ..state
                }
            }
            QueryIntent::GoToPage { page } => go_to_page(state, page),
            QueryIntent::FirstPage => go_to_page(state, 1),
            QueryIntent::PrevPage => {
                let target = state.page.saturating_sub(1);
                go_to_page(state, target)
            }
            QueryIntent::NextPage => {
                let target = state.page.saturating_add(1);
                go_to_page(state, target)
            }
            QueryIntent::LastPage => {
                let target = state.total_pages();
                go_to_page(state, target)
            }
        }
    }
}

fn go_to_page(state: QueryState, page: usize) -> QueryState {
    if page < 1 || page > state.total_pages() {
        return state;
    }
    QueryState { page, ..state }
}

/// Indices of `all` whose title contains `term`, ignoring case, in record order.
fn search(all: &[Product], term: &str) -> Vec<usize> {
    if term.is_empty() {
        return (0..all.len()).collect();
    }
    let needle = term.to_lowercase();
    all.iter()
        .enumerate()
        .filter(|(_, product)| product.title.to_lowercase().contains(&needle))
        .map(|(idx, _)| idx)
        .collect()
}

/// Stable sort. Descending reverses the comparator, so equal keys keep
/// their prior relative order in both directions.
fn sort_indices(all: &[Product], indices: &mut Vec<usize>, spec: SortSpec) {
    let directed = |ord: Ordering| match spec.order {
        SortOrder::Asc => ord,
        SortOrder::Desc => ord.reverse(),
    };

    match spec.field {
        SortField::Price => {
            indices.sort_by(|&a, &b| directed(all[a].price.total_cmp(&all[b].price)));
        }
        SortField::Name => {
            let mut keyed: Vec<(usize, String)> = indices
                .iter()
                .map(|&idx| (idx, all[idx].title.to_lowercase()))
                .collect();
            keyed.sort_by(|a, b| directed(a.1.cmp(&b.1)));
            *indices = keyed.into_iter().map(|(idx, _)| idx).collect();
        }
    }
}
