//! Application state management.
//!
//! Manages the menu session: filter state, selection, the working document,
//! and the pending saved-blocks fetch.

use crate::catalog::filter::{self, FilterState, MenuView, Tab};
use crate::catalog::types::{BlockType, Registry};
use crate::usage::UsageRecord;

/// Application state and UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Normal menu view
    Menu,
    /// Search mode
    Search,
}

/// The selection-callback payload: one emitted per inserted block.
#[derive(Debug, Clone, PartialEq)]
pub struct Insertion {
    /// Block type name
    pub name: String,
    /// Attributes applied to the fresh instance
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

/// Main application state.
///
/// Owns the block registry, the current filter state, the usage record, and
/// the list of blocks placed into the working document this session. The
/// menu contents are recomputed from these on every query; nothing derived
/// is cached.
#[derive(Debug)]
pub struct App {
    /// Read-only block catalog (plus merged reusable blocks)
    pub registry: Registry,
    /// Current search text, active tab, and per-tab scroll offsets
    pub filter: FilterState,
    /// Previously inserted block names, most recent first
    pub usage: UsageRecord,
    /// Blocks placed into the document, in insertion order
    pub document: Vec<Insertion>,
    /// Currently selected index within the visible menu
    pub selected_index: usize,
    /// Current UI mode
    pub mode: UiMode,
    /// Status message to display
    pub status_message: Option<String>,
    /// Pending saved-blocks fetch handle (resolved by the event loop)
    pub fetch_task: Option<tokio::task::JoinHandle<anyhow::Result<Vec<BlockType>>>>,
}

impl App {
    /// Create a new application state.
    ///
    /// # Arguments
    /// * `registry` - Block catalog to present
    /// * `usage` - Usage record backing the recent tab
    /// * `initial_tab` - Tab the menu opens on
    ///
    /// # Returns
    /// * `App` - New application state
    pub fn new(registry: Registry, usage: UsageRecord, initial_tab: Tab) -> Self {
        Self {
            registry,
            filter: FilterState::new(initial_tab),
            usage,
            document: Vec::new(),
            selected_index: 0,
            mode: UiMode::Menu,
            status_message: None,
            fetch_task: None,
        }
    }

    /// Compute the menu contents for the current filter state.
    ///
    /// # Returns
    /// * `MenuView` - What the menu presents right now
    pub fn menu_view(&self) -> MenuView<'_> {
        MenuView::build(&self.registry, &self.filter, self.usage.names())
    }

    /// Build the result-count announcement for the current view.
    ///
    /// # Returns
    /// * `String` - Human-readable result count, or the tab's empty-state
    ///   message when nothing is presented
    pub fn announce_results(&self) -> String {
        let len = self.menu_view().len();
        if len == 0 {
            filter::empty_message(self.filter.active_tab, self.filter.search_active())
        } else {
            filter::results_message(len)
        }
    }

    /// Get the currently selected block type.
    ///
    /// # Returns
    /// * `Option<&BlockType>` - Selected block or None if the view is empty
    pub fn selected_block(&self) -> Option<&BlockType> {
        self.menu_view().items().get(self.selected_index).copied()
    }

    /// Get the names of blocks currently placed in the document.
    ///
    /// # Returns
    /// * `Vec<String>` - Placed block type names, in insertion order
    pub fn placed_names(&self) -> Vec<String> {
        self.document.iter().map(|i| i.name.clone()).collect()
    }

    /// Check whether the selected block may not be inserted.
    ///
    /// # Returns
    /// * `bool` - True if the selection is a use-once block already placed
    pub fn is_selected_disabled(&self) -> bool {
        self.selected_block()
            .map(|b| filter::is_disabled(b, &self.placed_names()))
            .unwrap_or(false)
    }

    /// Move selection up.
    ///
    /// # Details
    /// Decrements selected index, wrapping to the bottom if at the top.
    pub fn move_up(&mut self) {
        let len = self.menu_view().len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Move selection down.
    ///
    /// # Details
    /// Increments selected index, wrapping to the top if at the bottom.
    pub fn move_down(&mut self) {
        let len = self.menu_view().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Add a character to the search text.
    ///
    /// # Arguments
    /// * `ch` - Character to add
    ///
    /// # Details
    /// Only works in Search mode. Selection resets to the first result.
    pub fn add_search_char(&mut self, ch: char) {
        if self.mode == UiMode::Search {
            let mut text = self.filter.search_text.clone();
            text.push(ch);
            self.filter = self.filter.with_search(text);
            self.selected_index = 0;
            self.set_status(self.announce_results());
        }
    }

    /// Remove the last character from the search text.
    ///
    /// # Details
    /// Only works in Search mode. Selection resets to the first result.
    pub fn remove_search_char(&mut self) {
        if self.mode == UiMode::Search {
            let mut text = self.filter.search_text.clone();
            text.pop();
            self.filter = self.filter.with_search(text);
            self.selected_index = 0;
            self.set_status(self.announce_results());
        }
    }

    /// Clear the search text.
    pub fn clear_search(&mut self) {
        self.filter = self.filter.cleared_search();
        self.selected_index = 0;
    }

    /// Switch to a different tab.
    ///
    /// # Arguments
    /// * `tab` - Tab to switch to
    ///
    /// # Details
    /// The leaving tab's selection offset is remembered; returning to a tab
    /// restores its previous position, clamped to the new view length.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.filter = self
            .filter
            .with_scroll(self.filter.active_tab, self.selected_index)
            .with_tab(tab);
        let len = self.menu_view().len();
        self.selected_index = self.filter.scroll_offset(tab).min(len.saturating_sub(1));
    }

    /// Switch to the next tab in display order.
    pub fn next_tab(&mut self) {
        self.switch_tab(self.filter.active_tab.next());
    }

    /// Switch to the previous tab in display order.
    pub fn previous_tab(&mut self) {
        self.switch_tab(self.filter.active_tab.previous());
    }

    /// Get the currently active tab.
    ///
    /// # Returns
    /// * `Tab` - Current active tab
    pub fn active_tab(&self) -> Tab {
        self.filter.active_tab
    }

    /// Insert the selected block into the document.
    ///
    /// # Returns
    /// * `Option<Insertion>` - The emitted selection payload, or None if
    ///   nothing was selected or the selection is disabled
    ///
    /// # Details
    /// Emits (name, initial attributes) exactly once, records the insertion
    /// in the usage record and the placed list, then clears the search text.
    pub fn insert_selected(&mut self) -> Option<Insertion> {
        let placed = self.placed_names();
        let (name, title, attributes, disabled) = {
            let block = self.selected_block()?;
            (
                block.name.clone(),
                block.title.clone(),
                block.initial_attributes.clone(),
                filter::is_disabled(block, &placed),
            )
        };

        if disabled {
            self.set_status(format!("{} is already in the document", title));
            return None;
        }

        let insertion = Insertion { name, attributes };
        self.usage.record_insert(&insertion.name);
        self.document.push(insertion.clone());
        self.clear_search();
        self.set_status(format!("Inserted: {}", title));

        Some(insertion)
    }

    /// Merge freshly fetched saved blocks into the registry.
    ///
    /// # Arguments
    /// * `blocks` - Saved blocks converted to block types
    ///
    /// # Details
    /// Selection is clamped in case the current view shrank.
    pub fn set_reusable_blocks(&mut self, blocks: Vec<BlockType>) {
        self.registry.set_reusable_blocks(blocks);
        let len = self.menu_view().len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    /// Set status message.
    ///
    /// # Arguments
    /// * `message` - Status message to display
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    /// Clear status message.
    #[allow(dead_code)] // Useful for auto-clearing status messages after timeout
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
