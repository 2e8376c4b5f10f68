//! Pure filtering pipeline for the block insertion menu.
//!
//! Search, tab partitioning, category ordering, grouping, and the use-once
//! disabled check. Everything here is a pure transformation over registry
//! data; rendering and state mutation live elsewhere.

use crate::catalog::types::{BlockType, Category, Registry, EMBED_CATEGORY, REUSABLE_CATEGORY};
use std::collections::HashMap;
use std::str::FromStr;

/// Menu view tab.
///
/// Closed set: every tab the menu can show is listed here, so the filter
/// dispatch is exhaustive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    /// Recently inserted blocks, most recent first
    Recent,
    /// Regular blocks (everything except embeds and reusable blocks)
    Blocks,
    /// Embeddable content providers
    Embeds,
    /// Saved reusable blocks
    Saved,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 4] = [Tab::Recent, Tab::Blocks, Tab::Embeds, Tab::Saved];

    /// Get the tab's display label.
    ///
    /// # Returns
    /// * `&str` - Label shown in the tab bar
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Recent => "Recent",
            Tab::Blocks => "Blocks",
            Tab::Embeds => "Embeds",
            Tab::Saved => "Saved",
        }
    }

    /// Get the tab following this one, wrapping around.
    ///
    /// # Returns
    /// * `Tab` - Next tab in display order
    pub fn next(&self) -> Tab {
        match self {
            Tab::Recent => Tab::Blocks,
            Tab::Blocks => Tab::Embeds,
            Tab::Embeds => Tab::Saved,
            Tab::Saved => Tab::Recent,
        }
    }

    /// Get the tab preceding this one, wrapping around.
    ///
    /// # Returns
    /// * `Tab` - Previous tab in display order
    pub fn previous(&self) -> Tab {
        match self {
            Tab::Recent => Tab::Saved,
            Tab::Blocks => Tab::Recent,
            Tab::Embeds => Tab::Blocks,
            Tab::Saved => Tab::Embeds,
        }
    }
}

impl Default for Tab {
    fn default() -> Self {
        Tab::Blocks
    }
}

/// Error returned when a tab name does not match any known tab.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tab name: {0}")]
pub struct ParseTabError(pub String);

impl FromStr for Tab {
    type Err = ParseTabError;

    /// Parse a tab from its configuration name.
    ///
    /// # Arguments
    /// * `s` - Tab name (case-insensitive)
    ///
    /// # Returns
    /// * `Result<Tab, ParseTabError>` - Parsed tab, or an error for unknown names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "recent" => Ok(Tab::Recent),
            "blocks" => Ok(Tab::Blocks),
            "embeds" => Ok(Tab::Embeds),
            "saved" => Ok(Tab::Saved),
            _ => Err(ParseTabError(s.to_string())),
        }
    }
}

/// Filter criteria for one menu session.
///
/// A plain value: state transitions return a new `FilterState` rather than
/// mutating in place, so every pipeline stage stays a pure function of its
/// inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Current search text, as typed
    pub search_text: String,
    /// Active tab
    pub active_tab: Tab,
    /// Remembered scroll offset per tab
    pub scroll_offsets: HashMap<Tab, usize>,
}

impl FilterState {
    /// Create a filter state opened on the given tab.
    ///
    /// # Arguments
    /// * `tab` - Initially active tab
    ///
    /// # Returns
    /// * `FilterState` - Fresh state with no search text
    pub fn new(tab: Tab) -> Self {
        Self {
            search_text: String::new(),
            active_tab: tab,
            scroll_offsets: HashMap::new(),
        }
    }

    /// Whether a search is in effect.
    ///
    /// # Returns
    /// * `bool` - True if the trimmed search text is non-empty
    pub fn search_active(&self) -> bool {
        !self.search_text.trim().is_empty()
    }

    /// Return a copy with different search text.
    pub fn with_search(&self, text: impl Into<String>) -> Self {
        Self {
            search_text: text.into(),
            ..self.clone()
        }
    }

    /// Return a copy with the search text cleared.
    pub fn cleared_search(&self) -> Self {
        self.with_search(String::new())
    }

    /// Return a copy switched to another tab.
    ///
    /// # Details
    /// Scroll offsets are kept per tab, so returning to a tab restores its
    /// previous position.
    pub fn with_tab(&self, tab: Tab) -> Self {
        Self {
            active_tab: tab,
            ..self.clone()
        }
    }

    /// Return a copy with the given tab's scroll offset recorded.
    pub fn with_scroll(&self, tab: Tab, offset: usize) -> Self {
        let mut next = self.clone();
        next.scroll_offsets.insert(tab, offset);
        next
    }

    /// Get the remembered scroll offset for a tab.
    ///
    /// # Returns
    /// * `usize` - Stored offset, or 0 if the tab was never scrolled
    pub fn scroll_offset(&self, tab: Tab) -> usize {
        self.scroll_offsets.get(&tab).copied().unwrap_or(0)
    }
}

/// Filter block types by search text.
///
/// # Arguments
/// * `items` - Candidate block types
/// * `text` - Raw search text; leading and trailing whitespace is ignored
///
/// # Returns
/// * `Vec<&BlockType>` - Blocks whose title or any keyword contains the
///   trimmed text, case-insensitively
///
/// # Details
/// An empty (or all-whitespace) search matches everything: the empty string
/// is a substring of every title, so the input comes back unfiltered.
pub fn search_blocks<'a>(items: &[&'a BlockType], text: &str) -> Vec<&'a BlockType> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|b| {
            b.title.to_lowercase().contains(&needle)
                || b.keywords
                    .iter()
                    .any(|k| k.to_lowercase().contains(&needle))
        })
        .copied()
        .collect()
}

/// Select the block types belonging to a tab.
///
/// # Arguments
/// * `items` - Candidate block types
/// * `tab` - Tab to partition by
/// * `usage` - Previously inserted block names, most recent first
///
/// # Returns
/// * `Vec<&BlockType>` - Blocks visible under the tab
///
/// # Details
/// The recent tab intersects the usage record with the currently available
/// catalog, preserving usage order; identifiers no longer in the catalog are
/// dropped. The other tabs partition by category.
pub fn select_tab_items<'a>(
    items: &[&'a BlockType],
    tab: Tab,
    usage: &[String],
) -> Vec<&'a BlockType> {
    match tab {
        Tab::Recent => usage
            .iter()
            .filter_map(|name| items.iter().find(|b| b.name == *name).copied())
            .collect(),
        Tab::Blocks => items
            .iter()
            .filter(|b| !b.in_category(EMBED_CATEGORY) && !b.in_category(REUSABLE_CATEGORY))
            .copied()
            .collect(),
        Tab::Embeds => items
            .iter()
            .filter(|b| b.in_category(EMBED_CATEGORY))
            .copied()
            .collect(),
        Tab::Saved => items
            .iter()
            .filter(|b| b.in_category(REUSABLE_CATEGORY))
            .copied()
            .collect(),
    }
}

/// Sort block types into category display order.
///
/// # Arguments
/// * `items` - Blocks to sort in place
/// * `tab` - Active tab
/// * `search_active` - Whether a search is in effect
/// * `registry` - Supplies the category ordering
///
/// # Details
/// The recent tab without an active search keeps its input order (usage
/// recency). Every other view is stable-sorted by the category's position in
/// the registry ordering; blocks with an undeclared category sort last.
pub fn sort_items(items: &mut [&BlockType], tab: Tab, search_active: bool, registry: &Registry) {
    if tab == Tab::Recent && !search_active {
        return;
    }
    items.sort_by_key(|b| {
        b.category
            .as_deref()
            .and_then(|slug| registry.category_position(slug))
            .unwrap_or(usize::MAX)
    });
}

/// One rendered category bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup<'a> {
    /// The declared category
    pub category: &'a Category,
    /// Member blocks, in post-sort order
    pub items: Vec<&'a BlockType>,
}

/// Group block types under their declared categories.
///
/// # Arguments
/// * `items` - Blocks in final display order
/// * `registry` - Supplies the declared categories and their order
///
/// # Returns
/// * `Vec<CategoryGroup>` - Non-empty groups in registry category order
///
/// # Details
/// Grouping is stable: within each group, blocks keep the order they arrived
/// in. Blocks whose category is not declared in the registry end up in no
/// group; `MenuView::build` keeps them visible as a trailing ungrouped run.
pub fn group_by_category<'a>(
    items: &[&'a BlockType],
    registry: &'a Registry,
) -> Vec<CategoryGroup<'a>> {
    registry
        .categories()
        .iter()
        .filter_map(|category| {
            let members: Vec<&BlockType> = items
                .iter()
                .filter(|b| b.in_category(&category.slug))
                .copied()
                .collect();
            if members.is_empty() {
                None
            } else {
                Some(CategoryGroup {
                    category,
                    items: members,
                })
            }
        })
        .collect()
}

/// Check whether a block may not be inserted right now.
///
/// # Arguments
/// * `item` - Block type to test
/// * `placed` - Names of blocks currently present in the document
///
/// # Returns
/// * `bool` - True iff the block is use-once and already placed
pub fn is_disabled(item: &BlockType, placed: &[String]) -> bool {
    item.use_once && placed.iter().any(|name| name == &item.name)
}

/// The computed menu contents for one filter state.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuView<'a> {
    /// No blocks match: render the no-results state
    Empty,
    /// A single run of blocks, no category headers
    Flat(Vec<&'a BlockType>),
    /// Category buckets in registry order, then any blocks whose category
    /// is not declared
    Grouped {
        groups: Vec<CategoryGroup<'a>>,
        ungrouped: Vec<&'a BlockType>,
    },
}

impl<'a> MenuView<'a> {
    /// Run the full filter pipeline for one filter state.
    ///
    /// # Arguments
    /// * `registry` - Read-only block catalog
    /// * `state` - Search text and active tab
    /// * `usage` - Previously inserted block names, most recent first
    ///
    /// # Returns
    /// * `MenuView` - What the menu should present
    ///
    /// # Details
    /// With an active search, tab partitioning is bypassed entirely and the
    /// search runs over the full visible catalog. The recent tab without a
    /// search stays flat in usage order. Otherwise results are grouped by
    /// category; when at most one declared category has matches, blocks are
    /// presented flat without a header. Blocks with an undeclared category
    /// are never dropped: flat views carry them inline (the flat list
    /// predates grouping) and grouped views carry them as a trailing run
    /// after the last bucket.
    pub fn build(registry: &'a Registry, state: &FilterState, usage: &[String]) -> MenuView<'a> {
        let catalog = registry.visible_types();
        let searching = state.search_active();

        let mut items = if searching {
            search_blocks(&catalog, &state.search_text)
        } else {
            select_tab_items(&catalog, state.active_tab, usage)
        };
        sort_items(&mut items, state.active_tab, searching, registry);

        if items.is_empty() {
            return MenuView::Empty;
        }
        if state.active_tab == Tab::Recent && !searching {
            return MenuView::Flat(items);
        }

        let groups = group_by_category(&items, registry);
        if groups.len() <= 1 {
            MenuView::Flat(items)
        } else {
            // Blocks with an undeclared category belong to no bucket but
            // still matched; present them as a trailing run. The sort has
            // already placed them after every declared category.
            let ungrouped: Vec<&BlockType> = items
                .iter()
                .filter(|b| {
                    b.category
                        .as_deref()
                        .and_then(|slug| registry.category_position(slug))
                        .is_none()
                })
                .copied()
                .collect();
            MenuView::Grouped { groups, ungrouped }
        }
    }

    /// Get every block in the view, in display order.
    ///
    /// # Returns
    /// * `Vec<&BlockType>` - Flattened contents
    pub fn items(&self) -> Vec<&'a BlockType> {
        match self {
            MenuView::Empty => Vec::new(),
            MenuView::Flat(items) => items.clone(),
            MenuView::Grouped { groups, ungrouped } => groups
                .iter()
                .flat_map(|g| g.items.iter().copied())
                .chain(ungrouped.iter().copied())
                .collect(),
        }
    }

    /// Count the blocks in the view.
    ///
    /// # Returns
    /// * `usize` - Number of presented blocks
    pub fn len(&self) -> usize {
        match self {
            MenuView::Empty => 0,
            MenuView::Flat(items) => items.len(),
            MenuView::Grouped { groups, ungrouped } => {
                groups.iter().map(|g| g.items.len()).sum::<usize>() + ungrouped.len()
            }
        }
    }

    /// Whether the view has no blocks.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the human-readable result-count announcement.
///
/// # Arguments
/// * `count` - Number of blocks the menu presents
///
/// # Returns
/// * `String` - Announcement text
pub fn results_message(count: usize) -> String {
    match count {
        0 => "No blocks found.".to_string(),
        1 => "1 block available.".to_string(),
        n => format!("{} blocks available.", n),
    }
}

/// Build the empty-state message for a view with no blocks.
///
/// # Arguments
/// * `tab` - Active tab
/// * `search_active` - Whether a search is in effect
///
/// # Returns
/// * `String` - Empty-state text
///
/// # Details
/// An empty search result reads as "no matches" regardless of tab. Without
/// a search, the recent and saved tabs explain why they are empty instead
/// of implying a failed lookup.
pub fn empty_message(tab: Tab, search_active: bool) -> String {
    if search_active {
        return results_message(0);
    }
    match tab {
        Tab::Recent => "No recently used blocks yet.".to_string(),
        Tab::Saved => "No saved blocks yet.".to_string(),
        _ => results_message(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_block(name: &str, title: &str, category: Option<&str>, keywords: &[&str]) -> BlockType {
        BlockType::new(
            name.to_string(),
            title.to_string(),
            category.map(|c| c.to_string()),
            keywords.iter().map(|k| k.to_string()).collect(),
            false,
            false,
            serde_json::Map::new(),
        )
    }

    fn test_registry() -> Registry {
        Registry::new(
            vec![
                Category::new("text", "Text"),
                Category::new("media", "Media"),
                Category::new(EMBED_CATEGORY, "Embeds"),
                Category::new(REUSABLE_CATEGORY, "Reusable"),
            ],
            vec![
                create_test_block("core/paragraph", "Paragraph", Some("text"), &["content"]),
                create_test_block("core/image", "Image", Some("media"), &["photo"]),
                create_test_block("core-embed/youtube", "YouTube", Some(EMBED_CATEGORY), &["video"]),
                create_test_block("core/block-1", "My Snippet", Some(REUSABLE_CATEGORY), &[]),
            ],
        )
    }

    #[test]
    fn test_search_returns_subset_with_matches() {
        let blocks = vec![
            create_test_block("core/paragraph", "Paragraph", Some("text"), &["content"]),
            create_test_block("core/image", "Image", Some("media"), &["photo"]),
        ];
        let refs: Vec<&BlockType> = blocks.iter().collect();

        let results = search_blocks(&refs, "photo");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "core/image");
        assert!(results.iter().all(|r| refs.contains(r)));
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_keywords() {
        let blocks = vec![
            create_test_block("core/heading", "Heading", Some("text"), &["Title", "subtitle"]),
            create_test_block("core/quote", "Quote", Some("text"), &["citation"]),
        ];
        let refs: Vec<&BlockType> = blocks.iter().collect();

        assert_eq!(search_blocks(&refs, "HEAD").len(), 1);
        assert_eq!(search_blocks(&refs, "tItLe").len(), 1);
        assert_eq!(search_blocks(&refs, "CITATION")[0].name, "core/quote");
    }

    #[test]
    fn test_empty_or_whitespace_search_returns_input_unchanged() {
        let blocks = vec![
            create_test_block("core/paragraph", "Paragraph", Some("text"), &[]),
            create_test_block("core/image", "Image", Some("media"), &[]),
        ];
        let refs: Vec<&BlockType> = blocks.iter().collect();

        assert_eq!(search_blocks(&refs, ""), refs);
        assert_eq!(search_blocks(&refs, "   "), refs);
        assert_eq!(search_blocks(&refs, "\t \n"), refs);
    }

    #[test]
    fn test_search_text_is_trimmed() {
        let blocks = vec![create_test_block("core/image", "Image", Some("media"), &["photo"])];
        let refs: Vec<&BlockType> = blocks.iter().collect();
        assert_eq!(search_blocks(&refs, "  photo  ").len(), 1);
    }

    #[test]
    fn test_blocks_tab_excludes_embeds_and_reusable() {
        let registry = test_registry();
        let catalog = registry.visible_types();
        let results = select_tab_items(&catalog, Tab::Blocks, &[]);
        let names: Vec<&str> = results.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["core/paragraph", "core/image"]);
    }

    #[test]
    fn test_embeds_tab_returns_only_embed_category() {
        let registry = Registry::new(
            vec![
                Category::new("text", "Text"),
                Category::new(EMBED_CATEGORY, "Embeds"),
            ],
            vec![
                create_test_block("core-embed/youtube", "YouTube", Some(EMBED_CATEGORY), &[]),
                create_test_block("core/paragraph", "Paragraph", Some("text"), &[]),
            ],
        );
        let catalog = registry.visible_types();
        let results = select_tab_items(&catalog, Tab::Embeds, &[]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "core-embed/youtube");
    }

    #[test]
    fn test_saved_tab_returns_only_reusable_category() {
        let registry = test_registry();
        let catalog = registry.visible_types();
        let results = select_tab_items(&catalog, Tab::Saved, &[]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "core/block-1");
    }

    #[test]
    fn test_recent_tab_preserves_usage_order_and_drops_unknown() {
        let registry = test_registry();
        let catalog = registry.visible_types();
        let usage = vec![
            "core/image".to_string(),
            "core/gone".to_string(),
            "core/paragraph".to_string(),
        ];
        let results = select_tab_items(&catalog, Tab::Recent, &usage);
        let names: Vec<&str> = results.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["core/image", "core/paragraph"]);
    }

    #[test]
    fn test_sort_orders_by_category_position_unknown_last() {
        let registry = test_registry();
        let blocks = vec![
            create_test_block("custom/widget", "Widget", Some("undeclared"), &[]),
            create_test_block("core/image", "Image", Some("media"), &[]),
            create_test_block("core/paragraph", "Paragraph", Some("text"), &[]),
        ];
        let mut refs: Vec<&BlockType> = blocks.iter().collect();
        sort_items(&mut refs, Tab::Blocks, false, &registry);
        let names: Vec<&str> = refs.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["core/paragraph", "core/image", "custom/widget"]);
    }

    #[test]
    fn test_sort_is_stable_within_a_category() {
        let registry = test_registry();
        let blocks = vec![
            create_test_block("core/quote", "Quote", Some("text"), &[]),
            create_test_block("core/image", "Image", Some("media"), &[]),
            create_test_block("core/paragraph", "Paragraph", Some("text"), &[]),
            create_test_block("core/heading", "Heading", Some("text"), &[]),
        ];
        let mut refs: Vec<&BlockType> = blocks.iter().collect();
        sort_items(&mut refs, Tab::Blocks, false, &registry);
        let text_names: Vec<&str> = refs
            .iter()
            .filter(|b| b.in_category("text"))
            .map(|b| b.name.as_str())
            .collect();
        // Relative order from the previous stage survives the sort.
        assert_eq!(text_names, vec!["core/quote", "core/paragraph", "core/heading"]);
    }

    #[test]
    fn test_sort_preserves_recent_order_without_search() {
        let registry = test_registry();
        let blocks = vec![
            create_test_block("core/image", "Image", Some("media"), &[]),
            create_test_block("core/paragraph", "Paragraph", Some("text"), &[]),
        ];
        let mut refs: Vec<&BlockType> = blocks.iter().collect();
        sort_items(&mut refs, Tab::Recent, false, &registry);
        assert_eq!(refs[0].name, "core/image");
        assert_eq!(refs[1].name, "core/paragraph");
    }

    #[test]
    fn test_grouping_preserves_multiset_and_order() {
        let registry = test_registry();
        let blocks = vec![
            create_test_block("core/paragraph", "Paragraph", Some("text"), &[]),
            create_test_block("core/heading", "Heading", Some("text"), &[]),
            create_test_block("core/image", "Image", Some("media"), &[]),
        ];
        let refs: Vec<&BlockType> = blocks.iter().collect();
        let groups = group_by_category(&refs, &registry);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category.slug, "text");
        assert_eq!(groups[1].category.slug, "media");

        let flattened: Vec<&BlockType> = groups
            .iter()
            .flat_map(|g| g.items.iter().copied())
            .collect();
        assert_eq!(flattened.len(), refs.len());
        assert!(refs.iter().all(|b| flattened.contains(b)));
        // Within-group order matches the input order.
        assert_eq!(groups[0].items[0].name, "core/paragraph");
        assert_eq!(groups[0].items[1].name, "core/heading");
    }

    #[test]
    fn test_grouping_drops_undeclared_categories() {
        let registry = test_registry();
        let blocks = vec![
            create_test_block("custom/widget", "Widget", Some("undeclared"), &[]),
            create_test_block("core/paragraph", "Paragraph", Some("text"), &[]),
        ];
        let refs: Vec<&BlockType> = blocks.iter().collect();
        let groups = group_by_category(&refs, &registry);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category.slug, "text");
    }

    #[test]
    fn test_is_disabled_only_for_placed_use_once() {
        let mut more = create_test_block("core/more", "More", Some("text"), &[]);
        more.use_once = true;
        let paragraph = create_test_block("core/paragraph", "Paragraph", Some("text"), &[]);

        let placed = vec!["core/more".to_string(), "core/paragraph".to_string()];
        assert!(is_disabled(&more, &placed));
        assert!(!is_disabled(&paragraph, &placed));
        assert!(!is_disabled(&more, &[]));
    }

    #[test]
    fn test_view_search_bypasses_tab_partition() {
        let registry = test_registry();
        // Embeds tab active, but the search hit lives in the text category.
        let state = FilterState::new(Tab::Embeds).with_search("content");
        let view = MenuView::build(&registry, &state, &[]);
        let names: Vec<&str> = view.items().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["core/paragraph"]);
    }

    #[test]
    fn test_view_empty_state() {
        let registry = test_registry();
        let state = FilterState::new(Tab::Blocks).with_search("no such block");
        assert_eq!(MenuView::build(&registry, &state, &[]), MenuView::Empty);
    }

    #[test]
    fn test_view_single_category_is_flat() {
        let registry = test_registry();
        let state = FilterState::new(Tab::Embeds);
        match MenuView::build(&registry, &state, &[]) {
            MenuView::Flat(items) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].name, "core-embed/youtube");
            }
            other => panic!("expected flat view, got {:?}", other),
        }
    }

    #[test]
    fn test_view_multiple_categories_are_grouped() {
        let registry = test_registry();
        let state = FilterState::new(Tab::Blocks);
        match MenuView::build(&registry, &state, &[]) {
            MenuView::Grouped { groups, ungrouped } => {
                assert_eq!(groups.len(), 2);
                assert_eq!(groups[0].category.slug, "text");
                assert_eq!(groups[1].category.slug, "media");
                assert!(ungrouped.is_empty());
            }
            other => panic!("expected grouped view, got {:?}", other),
        }
    }

    #[test]
    fn test_view_grouped_search_keeps_undeclared_category_matches() {
        let registry = Registry::new(
            vec![Category::new("text", "Text"), Category::new("media", "Media")],
            vec![
                create_test_block("core/paragraph", "Paragraph", Some("text"), &["shared"]),
                create_test_block("core/image", "Image", Some("media"), &["shared"]),
                create_test_block("custom/widget", "Shared Widget", Some("undeclared"), &[]),
            ],
        );
        let state = FilterState::new(Tab::Blocks).with_search("shared");

        let view = MenuView::build(&registry, &state, &[]);
        assert_eq!(view.len(), 3);
        let names: Vec<&str> = view.items().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["core/paragraph", "core/image", "custom/widget"]);
        match view {
            MenuView::Grouped { groups, ungrouped } => {
                assert_eq!(groups.len(), 2);
                assert_eq!(ungrouped.len(), 1);
                assert_eq!(ungrouped[0].name, "custom/widget");
            }
            other => panic!("expected grouped view, got {:?}", other),
        }
    }

    #[test]
    fn test_view_recent_is_flat_in_usage_order() {
        let registry = test_registry();
        let state = FilterState::new(Tab::Recent);
        let usage = vec!["core/image".to_string(), "core/paragraph".to_string()];
        match MenuView::build(&registry, &state, &usage) {
            MenuView::Flat(items) => {
                let names: Vec<&str> = items.iter().map(|b| b.name.as_str()).collect();
                assert_eq!(names, vec!["core/image", "core/paragraph"]);
            }
            other => panic!("expected flat view, got {:?}", other),
        }
    }

    #[test]
    fn test_tab_parsing() {
        assert_eq!("recent".parse::<Tab>().unwrap(), Tab::Recent);
        assert_eq!(" Saved ".parse::<Tab>().unwrap(), Tab::Saved);
        let err = "widgets".parse::<Tab>().unwrap_err();
        assert_eq!(err, ParseTabError("widgets".to_string()));
    }

    #[test]
    fn test_tab_parse_error_echoes_input_verbatim() {
        // The error carries the configured value as written, not the
        // normalized form used for matching.
        let err = "Widgets ".parse::<Tab>().unwrap_err();
        assert_eq!(err, ParseTabError("Widgets ".to_string()));
        assert_eq!(err.to_string(), "unknown tab name: Widgets ");
    }

    #[test]
    fn test_filter_state_transitions_keep_scroll_offsets() {
        let state = FilterState::new(Tab::Blocks)
            .with_scroll(Tab::Blocks, 7)
            .with_tab(Tab::Embeds)
            .with_search("video");

        assert_eq!(state.active_tab, Tab::Embeds);
        assert!(state.search_active());
        assert_eq!(state.scroll_offset(Tab::Blocks), 7);
        assert_eq!(state.scroll_offset(Tab::Embeds), 0);

        let cleared = state.cleared_search();
        assert!(!cleared.search_active());
        assert_eq!(cleared.scroll_offset(Tab::Blocks), 7);
    }

    #[test]
    fn test_results_message_wording() {
        assert_eq!(results_message(0), "No blocks found.");
        assert_eq!(results_message(1), "1 block available.");
        assert_eq!(results_message(12), "12 blocks available.");
    }

    #[test]
    fn test_empty_message_is_tab_aware_without_search() {
        assert_eq!(empty_message(Tab::Saved, false), "No saved blocks yet.");
        assert_eq!(empty_message(Tab::Recent, false), "No recently used blocks yet.");
        assert_eq!(empty_message(Tab::Blocks, false), "No blocks found.");
        assert_eq!(empty_message(Tab::Embeds, false), "No blocks found.");
        // A searching view always reads as a failed match.
        assert_eq!(empty_message(Tab::Saved, true), "No blocks found.");
    }
}
