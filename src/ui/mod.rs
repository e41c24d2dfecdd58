//! Terminal rendering layer.
//!
//! Transforms application state into ANSI-styled output and maps pointer
//! positions back to screen elements.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//!                                    ↓
//!                       ScreenLayout::hit_test ← pointer (row, col)
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: view model types with semantic roles and labels
//! - [`layout`]: screen geometry, grid columns, scroll windows, hit testing
//! - [`renderer`]: top-level rendering coordinator
//! - [`components`]: per-region renderers
//! - [`helpers`]: cursor positioning, truncation, wrapping, highlighting
//! - [`theme`]: color schemes and ANSI escapes

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use layout::{Hit, LayoutConfig, ScreenLayout};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    CardInfo, CategoryItem, DetailInfo, FooterInfo, GridInfo, MainContent, Role, SidebarInfo, StatusInfo,
    TopNavInfo, UIViewModel,
};
