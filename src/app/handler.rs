//! Event handling.
//!
//! [`handle_event`] is the only path that mutates [`AppState`]. It returns
//! whether the screen needs a redraw plus the side effects to run.
//!
//! Navigation, hover and click are ignored while the catalog is loading;
//! query edits are accepted and apply once the catalog arrives.
//!
//! # Event Sources
//!
//! | Source              | Events                                           |
//! |---------------------|--------------------------------------------------|
//! | keyboard            | `Navigate`, `Char`, `Backspace`, `FocusSearch`, `CloseFocus` |
//! | mouse               | `Hover`, `Click`, `FocusSearch`, `CloseDetail`   |
//! | render              | `Resize`                                         |
//! | Zellij              | `PermissionsResult`                              |
//! | catalog worker      | `WorkerResponse`                                 |

use super::focus::{self, Input, ListRegion};
use crate::app::{Action, AppState};
use crate::catalog::{Catalog, SourceSpec};
use crate::domain::error::Result;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events from the plugin shim and the catalog worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// One of the six directional inputs.
    Navigate(Input),

    /// Appends a character to the query. Ignored unless the search box has
    /// focus.
    Char(char),

    /// Deletes the last query character while typing a non-empty query;
    /// otherwise behaves as `Back`.
    Backspace,

    /// Replaces the whole query text.
    QueryChanged(String),

    /// Gives the search box focus.
    FocusSearch,

    /// Pointer over entry `index` of a list.
    Hover { region: ListRegion, index: usize },

    /// Pointer click on entry `index` of a list.
    Click { region: ListRegion, index: usize },

    /// The detail overlay's close button was pressed.
    CloseDetail,

    /// Hides the plugin pane.
    CloseFocus,

    /// The pane was resized.
    Resize { rows: usize, cols: usize },

    /// Outcome of the startup permission request.
    PermissionsResult { granted: bool },

    /// Reply from the catalog worker.
    WorkerResponse(WorkerResponse),
}

/// Processes `event` and returns `(needs_render, actions)`.
///
/// # Parameters
///
/// * `state` - Application state, mutated in place
/// * `event` - Event from the plugin shim or the worker
///
/// # Returns
///
/// - `bool` - `true` if the screen must be redrawn
/// - `Vec<Action>` - Side effects for the shim to execute, in order
///
/// # Example
///
/// ```rust
/// use recipe_explorer::{handle_event, Action, Config, Event};
///
/// let mut state = recipe_explorer::initialize(&Config::default());
/// let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
/// assert!(!render);
/// assert_eq!(actions, vec![Action::CloseFocus]);
/// ```
///
/// # Errors
///
/// Currently infallible; the signature leaves room for handlers that touch
/// fallible state.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Navigate(_) | Event::Hover { .. } | Event::Click { .. } if state.loading => {
            tracing::debug!("ignoring navigation while loading");
            Ok((false, vec![]))
        }
        Event::Navigate(input) => Ok((navigate(state, *input), vec![])),
        Event::Char(c) => {
            if !state.is_typing() {
                return Ok((false, vec![]));
            }
            let query = format!("{}{c}", state.browse.criteria.query);
            tracing::trace!(query = %query, "search query updated");
            Ok((state.transition(|browse, _| focus::edit_query(browse, &query)), vec![]))
        }
        Event::Backspace => {
            if state.is_typing() && !state.browse.criteria.query.is_empty() {
                let mut query = state.browse.criteria.query.clone();
                query.pop();
                return Ok((state.transition(|browse, _| focus::edit_query(browse, &query)), vec![]));
            }
            if state.loading {
                return Ok((false, vec![]));
            }
            Ok((navigate(state, Input::Back), vec![]))
        }
        Event::QueryChanged(query) => Ok((state.transition(|browse, _| focus::edit_query(browse, query)), vec![])),
        Event::FocusSearch => Ok((state.transition(|browse, _| focus::focus_search(browse)), vec![])),
        Event::Hover { region, index } => Ok((
            state.transition(|browse, ctx| focus::hover(browse, *region, *index, ctx)),
            vec![],
        )),
        Event::Click { region, index } => Ok((
            state.transition(|browse, ctx| focus::click(browse, *region, *index, ctx)),
            vec![],
        )),
        Event::CloseDetail => Ok((state.transition(|browse, _| focus::close_detail(browse)), vec![])),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Resize { rows, cols } => Ok((state.resize(*rows, *cols), vec![])),
        Event::PermissionsResult { granted } => Ok(handle_permissions(state, *granted)),
        Event::WorkerResponse(response) => Ok(handle_worker_response(state, response)),
    }
}

/// Runs one directional input through the focus machine.
fn navigate(state: &mut AppState, input: Input) -> bool {
    let changed = state.transition(|browse, ctx| focus::step(browse, input, ctx));
    if !changed {
        tracing::trace!(?input, region = state.region().name(), "input had no effect");
    }
    changed
}

/// Starts the catalog load, or fails it when a file source cannot be read.
fn handle_permissions(state: &mut AppState, granted: bool) -> (bool, Vec<Action>) {
    if granted || state.source == SourceSpec::Embedded {
        tracing::debug!(granted, source = ?state.source, "requesting catalog load");
        return (false, vec![Action::PostToWorker(WorkerMessage::load_catalog(state.source.clone()))]);
    }

    tracing::warn!(source = ?state.source, "filesystem access denied, catalog unavailable");
    state.catalog_failed();
    (true, vec![])
}

/// Ends the loading phase with the worker's catalog or the empty state.
fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Action>) {
    match response {
        WorkerResponse::CatalogLoaded { recipes, skipped } => {
            if *skipped > 0 {
                tracing::warn!(skipped, "some recipe records were skipped");
            }
            state.set_catalog(Catalog::new(recipes.clone()));
        }
        WorkerResponse::Error { message } => {
            tracing::error!(error = %message, "catalog load failed");
            state.catalog_failed();
        }
    }
    (true, vec![])
}
