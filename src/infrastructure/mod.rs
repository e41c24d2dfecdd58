//! Sandbox path handling.
//!
//! Zellij mounts the host filesystem under `/host` inside the plugin sandbox.
//! Paths from the plugin configuration are written from the user's point of
//! view and must be translated before the worker can open them.

pub mod paths;

pub use paths::{display_path, get_data_dir, resolve_sandbox_path};
