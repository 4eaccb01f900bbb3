use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen.
///
/// `reduce` takes the state by value and returns its successor, so a
/// transition can be tested without any surrounding app.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Pure `(State, Intent) -> State`. Must not fail and must not touch
    /// anything outside its arguments.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
