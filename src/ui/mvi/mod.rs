//! Model-View-Intent primitives.
//!
//! Every user action becomes an intent value; a reducer folds it into the
//! current state and the renderer draws whatever state comes out.
//!
//! ```text
//! key press ──→ Intent ──→ Reducer ──→ State ──→ frame
//!     ↑                                            │
//!     └────────────────────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
