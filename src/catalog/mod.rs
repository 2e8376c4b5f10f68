//! Block catalog module.
//!
//! Data model for insertable block types plus the pure filtering pipeline
//! that drives the insertion menu.

pub mod filter;
pub mod types;

pub use filter::{FilterState, MenuView, Tab};
pub use types::{BlockType, Category, Registry};
