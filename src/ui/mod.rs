//! User interface layer.
//!
//! Two outputs share one source of truth, the rendered element tree:
//!
//! ```text
//! NodeListState ──▶ Element tree ──┬──▶ to_html ──▶ escaped markup
//!                                  └──▶ UIViewModel ──▶ render ──▶ ANSI output
//! ```
//!
//! # Modules
//!
//! - [`element`]: Element tree and list item synthesis
//! - [`html`]: Escaped markup serialization
//! - [`viewmodel`]: View model types for the terminal pane
//! - [`renderer`]: Top-level terminal rendering coordinator
//! - [`components`]: Header, filter bar, list, empty state, footer
//! - [`helpers`]: Shared rendering utilities
//! - [`theme`]: Color schemes and ANSI escape generation

pub mod components;
pub mod element;
pub mod helpers;
pub mod html;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use element::{create_item, Element};
pub use html::to_html;
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{DisplayItem, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo, UIViewModel};
