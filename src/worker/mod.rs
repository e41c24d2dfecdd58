//! Background worker that loads the recipe catalog.
//!
//! Reading and parsing the dataset happens on a Zellij worker thread so the
//! plugin keeps rendering its loading state meanwhile.
//!
//! - `messages`: request/response protocol with trace context propagation
//! - `handler`: the worker state and message processing

pub mod handler;
pub mod messages;

pub use handler::{CatalogWorker, WORKER_NAME};
pub use messages::{decode, encode, TraceContext, WorkerMessage, WorkerResponse};
