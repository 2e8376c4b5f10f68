//! Wire models for the saved-blocks store.
//!
//! Contains structures for deserializing reusable block records from the
//! remote store and converting them into catalog block types.

use crate::catalog::types::{BlockType, REUSABLE_CATEGORY};
use serde::{Deserialize, Serialize};

/// A saved reusable block as returned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedBlock {
    /// Store-assigned record id
    pub id: u64,
    /// Saved block title
    pub title: String,
}

impl From<SavedBlock> for BlockType {
    /// Convert a saved store record into an insertable block type.
    ///
    /// # Arguments
    /// * `saved` - Saved block record
    ///
    /// # Returns
    /// * `BlockType` - Block type under the reusable category
    ///
    /// # Details
    /// The synthesized name embeds the record id, and the record id is also
    /// carried as the `ref` initial attribute so insertion can resolve the
    /// saved content later.
    fn from(saved: SavedBlock) -> Self {
        let mut attributes = serde_json::Map::new();
        attributes.insert("ref".to_string(), serde_json::Value::from(saved.id));

        BlockType::new(
            format!("core/block-{}", saved.id),
            saved.title,
            Some(REUSABLE_CATEGORY.to_string()),
            Vec::new(),
            false,
            false,
            attributes,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_block_converts_to_reusable_type() {
        let saved = SavedBlock {
            id: 42,
            title: "Call to action".to_string(),
        };
        let block: BlockType = saved.into();

        assert_eq!(block.name, "core/block-42");
        assert_eq!(block.title, "Call to action");
        assert!(block.in_category(REUSABLE_CATEGORY));
        assert_eq!(
            block.initial_attributes.get("ref"),
            Some(&serde_json::Value::from(42))
        );
        assert!(!block.use_once);
    }

    #[test]
    fn test_saved_block_deserializes_from_store_json() {
        let json = r#"[{"id": 1, "title": "Header"}, {"id": 2, "title": "Footer"}]"#;
        let records: Vec<SavedBlock> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Header");
        assert_eq!(records[1].id, 2);
    }
}
