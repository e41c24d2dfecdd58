//! Side effects requested by the event handler.
//!
//! [`handle_event`](super::handle_event) stays free of Zellij calls; it
//! returns actions and the plugin shim performs them in order.

use crate::worker::WorkerMessage;

/// A side effect for the plugin shim to perform.
///
/// # Example
///
/// ```rust
/// use recipe_explorer::catalog::SourceSpec;
/// use recipe_explorer::worker::WorkerMessage;
/// use recipe_explorer::Action;
///
/// let action = Action::PostToWorker(WorkerMessage::load_catalog(SourceSpec::Embedded));
/// assert!(matches!(action, Action::PostToWorker(WorkerMessage::LoadCatalog { .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Sends a request to the catalog worker.
    PostToWorker(WorkerMessage),
}
