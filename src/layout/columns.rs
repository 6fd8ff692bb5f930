//! Column balancing
//!
//! Distributes content items across a fixed number of display columns by
//! approximate rendered-line weight. Items are first grouped into blocks (a
//! section marker plus everything up to the next section or divider) so a
//! musical section stays in one column whenever it fits; a block is split
//! mid-section only when it alone outweighs a whole column.

use crate::models::{ContentItem, ItemKind};
use serde::{Deserialize, Serialize};

/// One display column of the final plan
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ColumnPlan {
    /// Items to render in this column, in order
    pub items: Vec<ContentItem>,

    /// Total rendered-line weight of the column
    pub weight: usize,
}

impl ColumnPlan {
    fn push(&mut self, item: ContentItem) {
        self.weight += item.render_lines();
        self.items.push(item);
    }
}

/// A group of items that should stay together across column breaks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    /// Items in this block
    pub items: Vec<ContentItem>,

    /// Total rendered-line weight
    pub weight: usize,
}

impl Block {
    fn push(&mut self, item: ContentItem) {
        self.weight += item.render_lines();
        self.items.push(item);
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Sections lighter than this never split, even when they overshoot the
/// per-column target (splitting a short section reads worse than an uneven
/// column).
const MIN_SPLIT_WEIGHT: usize = 8;

/// Group items into blocks.
///
/// A section marker starts a new block; a divider closes the current block
/// and is dropped (it delimits, it never renders inside a column). Items
/// before the first section form a leading block.
pub fn group_blocks(items: &[ContentItem]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current = Block::default();

    for item in items {
        match item.kind {
            ItemKind::Section => {
                if !current.is_empty() {
                    blocks.push(std::mem::take(&mut current));
                }
                current.push(item.clone());
            }
            ItemKind::Divider => {
                if !current.is_empty() {
                    blocks.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(item.clone()),
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

/// Balance items across `columns` display columns.
///
/// Greedy fill toward an even per-column weight target. Whole blocks move to
/// the next column rather than splitting; a long block landing in an empty
/// column spills item by item instead (short sections always stay whole).
/// The output always has exactly `columns` entries (trailing ones may be
/// empty), and concatenating the columns reproduces the input order minus
/// dividers.
pub fn balance_columns(items: &[ContentItem], columns: usize) -> Vec<ColumnPlan> {
    let columns = columns.max(1);
    let mut plans = vec![ColumnPlan::default(); columns];

    let blocks = group_blocks(items);
    let total: usize = blocks.iter().map(|b| b.weight).sum();
    if total == 0 {
        return plans;
    }

    // Round up so the early columns absorb the remainder
    let target = total.div_ceil(columns);
    let mut col = 0;

    for block in blocks {
        let overflows = plans[col].weight + block.weight > target;
        if overflows && !plans[col].items.is_empty() && col + 1 < columns {
            col += 1;
        }

        let splittable = block.weight > target && block.weight >= MIN_SPLIT_WEIGHT;
        if splittable && plans[col].items.is_empty() {
            // Oversize section: unavoidable mid-section split, spill item by item
            for item in block.items {
                if plans[col].weight >= target && col + 1 < columns {
                    col += 1;
                }
                plans[col].push(item);
            }
        } else {
            for item in block.items {
                plans[col].push(item);
            }
        }
    }

    plans
}
