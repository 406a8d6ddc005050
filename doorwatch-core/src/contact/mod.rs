//! Door contact sampling
//!
//! The raw contact reading is filtered by a [`Debouncer`] before the
//! state machine ever sees it.

pub mod debounce;
pub mod state;

pub use debounce::Debouncer;
pub use state::ContactState;
