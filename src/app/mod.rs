//! Application layer: state, events and the pure browse logic.
//!
//! ```text
//! key / pointer / worker reply → Event → handle_event → AppState::transition
//!                                              │              │
//!                                           Actions     focus::step + filter
//! ```
//!
//! - [`filter`]: the stateless filter engine
//! - [`focus`]: the directional focus state machine
//! - [`state`]: [`AppState`] and view model computation
//! - [`handler`]: [`Event`] dispatch
//! - [`keys`]: key to event mapping
//! - [`actions`]: side effects for the plugin shim

pub mod actions;
pub mod filter;
pub mod focus;
pub mod handler;
pub mod keys;
pub mod state;

pub use actions::Action;
pub use filter::{filtered, match_range, FilterCriteria};
pub use focus::{BrowseState, FocusState, Input, ListRegion, NavContext, Region};
pub use handler::{handle_event, Event};
pub use keys::{event_for_key, Key};
pub use state::AppState;
