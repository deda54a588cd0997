//! Block Collection
//!
//! Flat, insertion-ordered collection of unique block positions. At this
//! world scale a linearly scanned `Vec` is the right container; anything
//! replacing it (grid hash, octree) must preserve two invariants callers
//! rely on:
//!
//! - no two blocks share a position (placement checks occupancy first),
//! - iteration order is insertion order (the collision resolver's tie-break
//!   is "first overlapping block wins").

use crate::world::block::BlockPos;

/// The set of blocks making up the world.
#[derive(Debug)]
pub struct BlockWorld {
    blocks: Vec<BlockPos>,
    dirty: bool,
}

impl Default for BlockWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockWorld {
    /// Create an empty world.
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            dirty: true,
        }
    }

    /// All block positions, in insertion order.
    pub fn blocks(&self) -> &[BlockPos] {
        &self.blocks
    }

    /// Number of blocks in the world.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the world has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Whether a cell is occupied.
    pub fn contains(&self, pos: BlockPos) -> bool {
        self.blocks.contains(&pos)
    }

    /// Whether at least one of the six axis neighbors of `pos` is occupied.
    pub fn has_neighbor(&self, pos: BlockPos) -> bool {
        pos.neighbors().iter().any(|n| self.contains(*n))
    }

    /// Place a block. Placing into an occupied cell is a no-op.
    ///
    /// Returns `true` if a block was added.
    pub fn place(&mut self, pos: BlockPos) -> bool {
        if self.contains(pos) {
            return false;
        }
        self.blocks.push(pos);
        self.dirty = true;
        true
    }

    /// Remove the block at `pos`. Removing a missing position is a no-op.
    ///
    /// Returns `true` if a block was removed.
    pub fn remove(&mut self, pos: BlockPos) -> bool {
        match self.blocks.iter().position(|b| *b == pos) {
            Some(index) => {
                self.blocks.remove(index);
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Whether the collection changed since the last [`clear_dirty`] call.
    ///
    /// The renderer uses this to rebuild its instance buffer only when needed.
    ///
    /// [`clear_dirty`]: BlockWorld::clear_dirty
    pub fn needs_upload(&self) -> bool {
        self.dirty
    }

    /// Mark the current contents as uploaded.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_and_contains() {
        let mut world = BlockWorld::new();
        let pos = BlockPos::new(1, 2, 3);
        assert!(!world.contains(pos));
        assert!(world.place(pos));
        assert!(world.contains(pos));
        assert_eq!(world.len(), 1);
    }

    #[test]
    fn test_place_occupied_cell_is_noop() {
        let mut world = BlockWorld::new();
        let pos = BlockPos::new(0, 0, 0);
        assert!(world.place(pos));
        assert!(!world.place(pos), "second placement must be rejected");
        assert_eq!(world.len(), 1, "collection size must be unchanged");
    }

    #[test]
    fn test_remove_missing_position_is_noop() {
        let mut world = BlockWorld::new();
        world.place(BlockPos::new(0, 0, 0));
        assert!(!world.remove(BlockPos::new(5, 5, 5)));
        assert_eq!(world.len(), 1);
    }

    #[test]
    fn test_remove_exact_position() {
        let mut world = BlockWorld::new();
        let a = BlockPos::new(0, 0, 0);
        let b = BlockPos::new(1, 0, 0);
        world.place(a);
        world.place(b);
        assert!(world.remove(a));
        assert!(!world.contains(a));
        assert!(world.contains(b));
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let mut world = BlockWorld::new();
        let order = [
            BlockPos::new(2, 0, 0),
            BlockPos::new(0, 0, 0),
            BlockPos::new(1, 0, 0),
        ];
        for pos in order {
            world.place(pos);
        }
        assert_eq!(world.blocks(), &order);
    }

    #[test]
    fn test_has_neighbor() {
        let mut world = BlockWorld::new();
        world.place(BlockPos::new(0, 0, 0));
        assert!(world.has_neighbor(BlockPos::new(1, 0, 0)));
        assert!(world.has_neighbor(BlockPos::new(0, -1, 0)));
        assert!(!world.has_neighbor(BlockPos::new(3, 0, 0)));
        // Diagonal adjacency does not count
        assert!(!world.has_neighbor(BlockPos::new(1, 1, 0)));
    }

    #[test]
    fn test_dirty_tracking() {
        let mut world = BlockWorld::new();
        assert!(world.needs_upload(), "fresh world needs initial upload");
        world.clear_dirty();
        assert!(!world.needs_upload());

        world.place(BlockPos::new(0, 0, 0));
        assert!(world.needs_upload());
        world.clear_dirty();

        // No-op mutations do not re-dirty
        world.place(BlockPos::new(0, 0, 0));
        world.remove(BlockPos::new(9, 9, 9));
        assert!(!world.needs_upload());

        world.remove(BlockPos::new(0, 0, 0));
        assert!(world.needs_upload());
    }
}
