//! Block catalog data model.
//!
//! Contains structures for representing insertable block types, their
//! categories, and the read-only registry that owns both.

use serde::{Deserialize, Serialize};

/// Category slug reserved for embeddable content providers.
pub const EMBED_CATEGORY: &str = "embed";

/// Category slug reserved for saved reusable blocks.
pub const REUSABLE_CATEGORY: &str = "reusable-blocks";

/// Represents an insertable block type.
///
/// Immutable once constructed; owned by the [`Registry`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlockType {
    /// Unique block type name (e.g. "core/paragraph")
    pub name: String,
    /// Human-readable title
    pub title: String,
    /// Category slug, if the block belongs to one
    pub category: Option<String>,
    /// Search keywords, in declaration order
    pub keywords: Vec<String>,
    /// Whether the block is hidden from the insertion menu
    pub is_private: bool,
    /// Whether only one instance may exist in a document
    pub use_once: bool,
    /// Opaque attributes applied to a freshly inserted instance
    pub initial_attributes: serde_json::Map<String, serde_json::Value>,
}

impl BlockType {
    /// Create a new BlockType instance.
    ///
    /// # Arguments
    /// * `name` - Unique block type name
    /// * `title` - Human-readable title
    /// * `category` - Category slug, or None for uncategorized blocks
    /// * `keywords` - Search keywords
    /// * `is_private` - Hidden from the menu when true
    /// * `use_once` - Restricted to one instance per document when true
    /// * `initial_attributes` - Attributes for newly inserted instances
    ///
    /// # Returns
    /// * `BlockType` - New block type instance
    #[allow(clippy::too_many_arguments)] // Constructor requires all block type fields
    pub fn new(
        name: String,
        title: String,
        category: Option<String>,
        keywords: Vec<String>,
        is_private: bool,
        use_once: bool,
        initial_attributes: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self {
            name,
            title,
            category,
            keywords,
            is_private,
            use_once,
            initial_attributes,
        }
    }

    /// Check whether this block type belongs to the given category slug.
    ///
    /// # Arguments
    /// * `slug` - Category slug to test
    ///
    /// # Returns
    /// * `bool` - True if the block's category matches
    pub fn in_category(&self, slug: &str) -> bool {
        self.category.as_deref() == Some(slug)
    }
}

/// A named grouping bucket for block types.
///
/// Display order is the registry's declaration order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique category slug
    pub slug: String,
    /// Human-readable title
    pub title: String,
}

impl Category {
    /// Create a new Category instance.
    ///
    /// # Arguments
    /// * `slug` - Unique category slug
    /// * `title` - Human-readable title
    ///
    /// # Returns
    /// * `Category` - New category instance
    pub fn new(slug: &str, title: &str) -> Self {
        Self {
            slug: slug.to_string(),
            title: title.to_string(),
        }
    }
}

/// Read-only catalog of available block types and categories.
///
/// Queried by the filter pipeline, never mutated by it. The one mutation
/// path is [`Registry::set_reusable_blocks`], which merges the
/// asynchronously fetched saved blocks under the reusable category.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Categories in declared display order
    categories: Vec<Category>,
    /// All registered block types
    block_types: Vec<BlockType>,
}

impl Registry {
    /// Create a registry from explicit categories and block types.
    ///
    /// # Arguments
    /// * `categories` - Categories in display order
    /// * `block_types` - Registered block types
    ///
    /// # Returns
    /// * `Registry` - New registry instance
    pub fn new(categories: Vec<Category>, block_types: Vec<BlockType>) -> Self {
        Self {
            categories,
            block_types,
        }
    }

    /// Create a registry pre-populated with the built-in core catalog.
    ///
    /// # Returns
    /// * `Registry` - Registry holding the default block types and categories
    ///
    /// # Details
    /// The reusable category starts empty; saved blocks are merged in once
    /// the store fetch resolves.
    pub fn with_core_blocks() -> Self {
        let categories = vec![
            Category::new("text", "Text"),
            Category::new("media", "Media"),
            Category::new("design", "Design"),
            Category::new("widgets", "Widgets"),
            Category::new(EMBED_CATEGORY, "Embeds"),
            Category::new(REUSABLE_CATEGORY, "Reusable"),
        ];

        let mut block_types = vec![
            block("core/paragraph", "Paragraph", "text", &["content", "text"]),
            block("core/heading", "Heading", "text", &["title", "subtitle"]),
            block("core/list", "List", "text", &["bullet", "numbered"]),
            block("core/quote", "Quote", "text", &["blockquote", "citation"]),
            block("core/code", "Code", "text", &["preformatted", "source"]),
            block("core/image", "Image", "media", &["photo", "picture"]),
            block("core/gallery", "Gallery", "media", &["images", "carousel"]),
            block("core/audio", "Audio", "media", &["music", "sound"]),
            block("core/video", "Video", "media", &["movie", "clip"]),
            block("core/cover", "Cover", "media", &["banner", "hero"]),
            block("core/file", "File", "media", &["download", "document"]),
            block("core/button", "Button", "design", &["link", "call to action"]),
            block("core/columns", "Columns", "design", &["layout", "grid"]),
            block("core/separator", "Separator", "design", &["divider", "horizontal rule"]),
            block("core/spacer", "Spacer", "design", &["gap", "whitespace"]),
            block("core/table", "Table", "widgets", &["rows", "cells"]),
            block("core/shortcode", "Shortcode", "widgets", &["snippet"]),
            block("core/html", "Custom HTML", "widgets", &["markup", "raw"]),
            block("core-embed/youtube", "YouTube", EMBED_CATEGORY, &["video", "music"]),
            block("core-embed/twitter", "Twitter", EMBED_CATEGORY, &["tweet", "social"]),
            block("core-embed/vimeo", "Vimeo", EMBED_CATEGORY, &["video"]),
            block("core-embed/spotify", "Spotify", EMBED_CATEGORY, &["music", "playlist"]),
        ];

        // The "more" divider only makes sense once per document.
        let mut more = block("core/more", "More", "design", &["read more", "teaser"]);
        more.use_once = true;
        block_types.push(more);

        // Heading starts at level two; level one is the document title.
        let mut heading_attrs = serde_json::Map::new();
        heading_attrs.insert("level".to_string(), serde_json::Value::from(2));
        if let Some(heading) = block_types.iter_mut().find(|b| b.name == "core/heading") {
            heading.initial_attributes = heading_attrs;
        }

        // Placeholder used for unrecognized content; never offered for insertion.
        let mut missing = block("core/missing", "Unrecognized Block", "text", &[]);
        missing.category = None;
        missing.is_private = true;
        block_types.push(missing);

        Self::new(categories, block_types)
    }

    /// Get categories in display order.
    ///
    /// # Returns
    /// * `&[Category]` - Declared categories
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Get all block types visible in the insertion menu.
    ///
    /// # Returns
    /// * `Vec<&BlockType>` - Registered block types, private entries skipped
    pub fn visible_types(&self) -> Vec<&BlockType> {
        self.block_types.iter().filter(|b| !b.is_private).collect()
    }

    /// Look up a block type by name.
    ///
    /// # Arguments
    /// * `name` - Block type name
    ///
    /// # Returns
    /// * `Option<&BlockType>` - Matching block type, if registered
    pub fn get_type(&self, name: &str) -> Option<&BlockType> {
        self.block_types.iter().find(|b| b.name == name)
    }

    /// Look up a category by slug.
    ///
    /// # Arguments
    /// * `slug` - Category slug
    ///
    /// # Returns
    /// * `Option<&Category>` - Matching category, if declared
    #[allow(dead_code)] // Useful for hosts resolving category metadata by slug
    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// Get the display-order index of a category slug.
    ///
    /// # Arguments
    /// * `slug` - Category slug
    ///
    /// # Returns
    /// * `Option<usize>` - Index within the declared ordering
    pub fn category_position(&self, slug: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.slug == slug)
    }

    /// Replace the reusable-category block types with a freshly fetched set.
    ///
    /// # Arguments
    /// * `blocks` - Saved blocks converted to block types
    ///
    /// # Details
    /// Drops any previously merged reusable entries first, so repeated
    /// fetches do not accumulate duplicates.
    pub fn set_reusable_blocks(&mut self, blocks: Vec<BlockType>) {
        self.block_types.retain(|b| !b.in_category(REUSABLE_CATEGORY));
        self.block_types.extend(blocks);
    }
}

/// Build a public, single-use-unrestricted block type with no attributes.
fn block(name: &str, title: &str, category: &str, keywords: &[&str]) -> BlockType {
    BlockType::new(
        name.to_string(),
        title.to_string(),
        Some(category.to_string()),
        keywords.iter().map(|k| k.to_string()).collect(),
        false,
        false,
        serde_json::Map::new(),
    )
}
