//! Domain layer for the Recipe Explorer plugin.
//!
//! Core domain types, independent of Zellij APIs and of the rendering layer.
//!
//! - [`error`]: Error types and result alias
//! - [`recipe`]: The immutable recipe record and its identifier
//! - [`category`]: Sidebar categories and their derivation from a recipe set

pub mod category;
pub mod error;
pub mod recipe;

pub use category::{derive_categories, Category, ALL_LABEL};
pub use error::{RecipeExplorerError, Result};
pub use recipe::{Recipe, RecipeId};
