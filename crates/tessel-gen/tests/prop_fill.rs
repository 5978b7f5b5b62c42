use proptest::prelude::*;
use tessel_gen::{FillMode, FillParams, Terrain, Uniform, fill_terrain, fill_uniform};
use tessel_grid::EMPTY;

fn dims() -> impl Strategy<Value = (usize, usize, usize)> {
    (0usize..=8, 0usize..=8, 0usize..=8)
}

proptest! {
    // Same seed, same grid
    #[test]
    fn uniform_is_deterministic(d in dims(), seed in any::<u64>()) {
        let s = Uniform::default();
        prop_assert_eq!(fill_uniform(d, seed, &s).unwrap(), fill_uniform(d, seed, &s).unwrap());
    }

    // Dims are respected and every placed type is within range
    #[test]
    fn uniform_respects_dims_and_types(
        d in dims(),
        seed in any::<u64>(),
        lo in 1u16..5,
        span in 0u16..5,
        density in 0.0f32..=1.0,
    ) {
        let s = Uniform { density, min_type: lo, max_type: lo + span };
        let grid = fill_uniform(d, seed, &s).unwrap();
        prop_assert_eq!(grid.dims(), d);
        for &c in grid.cells() {
            prop_assert!(c == EMPTY || (lo..=lo + span).contains(&c));
        }
    }

    // Columns are solid up to their height, capped by the surface type
    #[test]
    fn terrain_columns_are_contiguous(d in dims(), seed in any::<u64>()) {
        let t = Terrain::default();
        let grid = fill_terrain(d, seed, &t).unwrap();
        prop_assert_eq!(grid.dims(), d);
        let (sx, sy, sz) = d;
        for x in 0..sx {
            for z in 0..sz {
                let h = (0..sy).take_while(|&y| grid.get(x, y, z) != EMPTY).count();
                prop_assert!((h..sy).all(|y| grid.get(x, y, z) == EMPTY));
                if h > 0 {
                    prop_assert_eq!(grid.get(x, h - 1, z), t.surface_type);
                    prop_assert!((0..h - 1).all(|y| grid.get(x, y, z) == t.subsurface_type));
                }
            }
        }
    }

    #[test]
    fn terrain_is_deterministic(d in dims(), seed in any::<u64>()) {
        let params = FillParams { mode: FillMode::Terrain, size: [d.0, d.1, d.2], seed, ..FillParams::default() };
        prop_assert_eq!(params.build().unwrap(), params.build().unwrap());
    }
}
