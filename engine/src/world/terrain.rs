//! Terrain Generation
//!
//! Builds the startup world: a square footprint of block columns whose
//! heights come from a smooth sine/cosine surface plus a small random
//! jitter. Runs once before the frame loop; the world is mutated only by
//! the player afterwards.

use rand::Rng;

use crate::world::block::BlockPos;
use crate::world::blocks::BlockWorld;

/// Number of columns along each horizontal axis of the generated world.
pub const DEFAULT_WORLD_SIZE: i32 = 20;

/// Column height for grid cell `(x, z)` given its random jitter.
///
/// Smooth rolling hills from `(sin(x*0.2) + cos(z*0.2)) * 2`, lifted by an
/// integer jitter in `0..3` and clamped so every column has at least one
/// block.
fn column_height(x: i32, z: i32, jitter: i32) -> i32 {
    let smooth = ((x as f32 * 0.2).sin() + (z as f32 * 0.2).cos()) * 2.0;
    ((smooth + jitter as f32) as i32).max(1)
}

/// Generate a world with the given footprint using the supplied RNG.
///
/// For every `(x, z)` column one block is emitted per vertical level from 0
/// up to (exclusive) the column height. The footprint is centered on the
/// origin: column `(0, 0)` sits at grid `(-world_size/2, _, -world_size/2)`.
pub fn generate_with<R: Rng>(world_size: i32, rng: &mut R) -> BlockWorld {
    let mut world = BlockWorld::new();
    let half = world_size / 2;

    for x in 0..world_size {
        for z in 0..world_size {
            let height = column_height(x, z, rng.gen_range(0..3));
            for y in 0..height {
                world.place(BlockPos::new(x - half, y, z - half));
            }
        }
    }

    world
}

/// Generate a world with the given footprint, seeded from the thread RNG.
///
/// Deterministic per run only; heights are not reproducible across runs.
pub fn generate(world_size: i32) -> BlockWorld {
    generate_with(world_size, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_every_column_has_ground_level_block() {
        let mut rng = StepRng::new(0, 0);
        let world = generate_with(DEFAULT_WORLD_SIZE, &mut rng);
        let half = DEFAULT_WORLD_SIZE / 2;
        for x in 0..DEFAULT_WORLD_SIZE {
            for z in 0..DEFAULT_WORLD_SIZE {
                assert!(
                    world.contains(BlockPos::new(x - half, 0, z - half)),
                    "column ({}, {}) is missing its ground block",
                    x,
                    z
                );
            }
        }
    }

    #[test]
    fn test_block_count_matches_column_heights() {
        let mut rng = StepRng::new(0, 0);
        let world = generate_with(8, &mut rng);
        // StepRng yields jitter 0 every draw, so heights are the pure
        // sine/cosine surface clamped to >= 1.
        let expected: i32 = (0..8)
            .flat_map(|x| (0..8).map(move |z| column_height(x, z, 0)))
            .sum();
        assert_eq!(world.len() as i32, expected);
    }

    #[test]
    fn test_columns_are_contiguous_from_ground() {
        let mut rng = StepRng::new(0, 0);
        let world = generate_with(8, &mut rng);
        for &pos in world.blocks() {
            assert!(pos.0.y >= 0, "no blocks below ground level");
            if pos.0.y > 0 {
                assert!(
                    world.contains(BlockPos::new(pos.0.x, pos.0.y - 1, pos.0.z)),
                    "block {:?} is floating",
                    pos
                );
            }
        }
    }

    #[test]
    fn test_footprint_is_centered() {
        let mut rng = StepRng::new(0, 0);
        let world = generate_with(DEFAULT_WORLD_SIZE, &mut rng);
        let half = DEFAULT_WORLD_SIZE / 2;
        for &pos in world.blocks() {
            assert!(pos.0.x >= -half && pos.0.x < half);
            assert!(pos.0.z >= -half && pos.0.z < half);
        }
    }

    #[test]
    fn test_minimum_height_is_one() {
        // The smooth surface dips to -4; jitter 0 must still leave a block.
        assert_eq!(column_height(16, 16, 0).max(1), column_height(16, 16, 0));
        for x in 0..32 {
            for z in 0..32 {
                assert!(column_height(x, z, 0) >= 1);
            }
        }
    }

    #[test]
    fn test_generated_positions_are_unique() {
        let mut rng = StepRng::new(0, 0);
        let world = generate_with(6, &mut rng);
        let blocks = world.blocks();
        for (i, a) in blocks.iter().enumerate() {
            for b in &blocks[i + 1..] {
                assert_ne!(a, b, "duplicate block position generated");
            }
        }
    }
}
