//! Saved-blocks store integration module.
//!
//! Provides the client for fetching saved reusable blocks at session start.

pub mod client;
pub mod models;

pub use client::ReusableStore;
pub use models::SavedBlock;
