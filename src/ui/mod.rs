//! UI components module.
//!
//! Contains ratatui widgets for displaying the application interface.

pub mod document;
pub mod list;
pub mod search;
pub mod tabs;

pub use document::render_document;
pub use list::render_menu;
pub use search::render_search;
pub use tabs::render_tabs;
