use tessel_geom::Vec3;
use tessel_mesh::{
    Direction, Mesh, MeshConfig, MeshError, MeshGenerator, Palette, VoxelGrid, generate_mesh,
};

fn grid_from(sx: usize, sy: usize, sz: usize, cells: &[u16]) -> VoxelGrid {
    VoxelGrid::from_cells(sx, sy, sz, cells.to_vec()).unwrap()
}

fn solid(n: usize, id: u16) -> VoxelGrid {
    grid_from(n, n, n, &vec![id; n * n * n])
}

fn tri_area_sum(mesh: &Mesh) -> f32 {
    mesh.triangle_positions()
        .map(|[a, b, c]| 0.5 * (b - a).cross(c - a).length())
        .sum()
}

#[test]
fn single_voxel_emits_all_six_faces() {
    let g = grid_from(1, 1, 1, &[1]);
    let m = generate_mesh(&g, MeshConfig::APPEND).unwrap();
    assert_eq!(m.face_count(), 6);
    assert_eq!(m.vertex_count(), 24);
    assert_eq!(m.triangle_count(), 12);
    assert_eq!(m.indices().len(), 36);
    assert!(!m.has_colors());
}

#[test]
fn single_voxel_vertices_follow_emit_order() {
    let g = grid_from(1, 1, 1, &[3]);
    let m = generate_mesh(&g, MeshConfig::APPEND).unwrap();
    // Each block of four vertices lies on the face for the matching direction.
    for (face, dir) in Direction::EMIT_ORDER.iter().enumerate() {
        let (dx, dy, dz) = dir.delta();
        let n = Vec3::new(dx as f32, dy as f32, dz as f32);
        for v in &m.vertices()[face * 4..face * 4 + 4] {
            assert_eq!(v.dot(n), 0.5, "face {} of {}", face, dir.label());
        }
        for nrm in &m.normals()[face * 4..face * 4 + 4] {
            assert_eq!(*nrm, n);
        }
    }
    assert_eq!(&m.indices()[..6], &[0, 1, 2, 2, 1, 3]);
    assert_eq!(&m.indices()[6..12], &[4, 5, 6, 6, 5, 7]);
}

#[test]
fn voxel_offset_by_its_coordinates() {
    let mut g = VoxelGrid::new(3, 4, 5).unwrap();
    g.set(2, 3, 1, 1);
    let m = generate_mesh(&g, MeshConfig::APPEND).unwrap();
    let bb = m.bounds().unwrap();
    assert_eq!(bb.min, Vec3::new(1.5, 2.5, 0.5));
    assert_eq!(bb.max, Vec3::new(2.5, 3.5, 1.5));
}

#[test]
fn touching_same_type_hides_shared_faces() {
    let g = grid_from(2, 1, 1, &[1, 1]);
    let mut mesher = MeshGenerator::new();
    let m = mesher.generate(&g, MeshConfig::APPEND).unwrap();
    assert_eq!(m.face_count(), 10);
    assert_eq!(m.vertex_count(), 40);
    assert_eq!(m.indices().len(), 60);
    let stats = mesher.last_stats();
    assert_eq!(stats.culled_faces, 2);
    assert_eq!(stats.faces_by_direction[Direction::PosX.index()], 1);
    assert_eq!(stats.faces_by_direction[Direction::NegX.index()], 1);
    assert_eq!(stats.faces_by_direction[Direction::PosY.index()], 2);
    // No vertex sits on the interior plane x = 0.5 facing along x.
    for (v, n) in m.vertices().iter().zip(m.normals()) {
        if v.x == 0.5 {
            assert_eq!(n.x, 0.0);
        }
    }
}

#[test]
fn touching_different_types_also_hide_shared_faces() {
    let g = grid_from(2, 1, 1, &[1, 2]);
    let m = generate_mesh(&g, MeshConfig::APPEND).unwrap();
    assert_eq!(m.face_count(), 10);
}

#[test]
fn empty_grid_yields_empty_mesh() {
    for config in MeshConfig::VALID {
        let g = VoxelGrid::new(4, 3, 2).unwrap();
        let m = generate_mesh(&g, config).unwrap();
        assert!(m.is_empty());
        assert_eq!(m.vertex_count(), 0);
        assert!(m.bounds().is_none());
        if config.assign_colors {
            assert_eq!(m.colors().map(|c| c.len()), Some(0));
        }
    }
    let zero = VoxelGrid::new(0, 0, 0).unwrap();
    assert!(generate_mesh(&zero, MeshConfig::DEDUP).unwrap().is_empty());
}

#[test]
fn dedup_single_voxel_has_eight_corners() {
    let g = grid_from(1, 1, 1, &[1]);
    let m = generate_mesh(&g, MeshConfig::DEDUP).unwrap();
    assert_eq!(m.face_count(), 6);
    assert_eq!(m.vertex_count(), 8);
    assert_eq!(m.triangle_count(), 12);
    // Cube corners average three orthogonal faces.
    let k = 1.0 / 3f32.sqrt();
    for (v, n) in m.vertices().iter().zip(m.normals()) {
        let want = Vec3::new(k * v.x.signum(), k * v.y.signum(), k * v.z.signum());
        assert!((*n - want).length() < 1e-6, "{:?} -> {:?}", v, n);
    }
}

#[test]
fn dedup_concave_corner_averages_every_touching_face() {
    // L shape in the z = 0 layer: (0,0), (0,1) and (1,0) occupied.
    let g = grid_from(2, 2, 1, &[1, 1, 1, 0]);
    let m = generate_mesh(&g, MeshConfig::DEDUP).unwrap();
    let corner = Vec3::new(0.5, 0.5, 0.5);
    let i = m.vertices().iter().position(|v| *v == corner).unwrap();
    // Three +z faces, the +x face of (0,1) and the +y face of (1,0).
    let want = Vec3::new(1.0, 1.0, 3.0).normalized();
    let got = m.normals()[i];
    assert!((got - want).length() < 1e-6, "{:?}", got);
}

#[test]
fn dedup_solid_block_keeps_only_surface_lattice() {
    for n in 1..=4usize {
        let g = solid(n, 1);
        let m = generate_mesh(&g, MeshConfig::DEDUP).unwrap();
        let surface = (n + 1).pow(3) - (n - 1).pow(3);
        assert_eq!(m.vertex_count(), surface, "n = {}", n);
        assert_eq!(m.face_count(), 6 * n * n);
    }
}

#[test]
fn solid_block_surface_area() {
    let g = solid(3, 2);
    let m = generate_mesh(&g, MeshConfig::APPEND).unwrap();
    assert_eq!(m.face_count(), 54);
    assert!((tri_area_sum(&m) - 54.0).abs() < 1e-4);
    let bb = m.bounds().unwrap();
    assert_eq!(bb.min, Vec3::splat(-0.5));
    assert_eq!(bb.max, Vec3::splat(2.5));
}

#[test]
fn hollow_shell_emits_inner_faces() {
    // 3x3x3 shell with an empty center: six inward faces around the hole.
    let mut cells = vec![1u16; 27];
    cells[13] = 0;
    let g = grid_from(3, 3, 3, &cells);
    let m = generate_mesh(&g, MeshConfig::APPEND).unwrap();
    assert_eq!(m.face_count(), 54 + 6);
}

#[test]
fn colors_follow_palette_and_stay_parallel() {
    let g = grid_from(3, 1, 1, &[1, 0, 7]);
    let palette = Palette::empty([9, 9, 9, 255]).with_color(1, [200, 10, 10, 255]);
    let mut mesher = MeshGenerator::with_palette(palette);
    let m = mesher.generate(&g, MeshConfig::APPEND_COLORED).unwrap();
    let colors = m.colors().unwrap();
    assert_eq!(colors.len(), m.vertex_count());
    assert_eq!(m.face_count(), 12);
    // The first voxel's faces come first in traversal order.
    assert!(colors[..24].iter().all(|c| *c == [200, 10, 10, 255]));
    assert!(colors[24..].iter().all(|c| *c == [9, 9, 9, 255]));
}

#[test]
fn colors_with_dedup_is_rejected_before_emitting() {
    let g = solid(2, 1);
    let mut mesher = MeshGenerator::new();
    mesher.generate(&g, MeshConfig::APPEND).unwrap();
    assert!(!mesher.is_clear());

    let both = MeshConfig {
        dedup_vertices: true,
        assign_colors: true,
    };
    assert_eq!(mesher.generate(&g, both), Err(MeshError::ColorsRequireAppend));
    assert!(mesher.is_clear());
    assert_eq!(mesher.last_stats().faces, 0);
}

#[test]
fn generate_is_deterministic_across_clear() {
    let g = grid_from(2, 2, 2, &[1, 0, 2, 2, 0, 1, 1, 1]);
    for config in MeshConfig::VALID {
        let mut mesher = MeshGenerator::new();
        let a = mesher.generate(&g, config).unwrap();
        mesher.clear();
        assert!(mesher.is_clear());
        let b = mesher.generate(&g, config).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn regenerate_matches_fresh_generate() {
    let first = solid(3, 1);
    let second = grid_from(2, 1, 2, &[1, 2, 0, 1]);
    for config in MeshConfig::VALID {
        let mut used = MeshGenerator::new();
        used.generate(&first, MeshConfig::APPEND).unwrap();
        let regenerated = used.regenerate(&second, config).unwrap();

        let mut fresh = MeshGenerator::new();
        fresh.clear();
        let expected = fresh.generate(&second, config).unwrap();
        assert_eq!(regenerated, expected);
        assert_eq!(used.last_stats(), fresh.last_stats());
    }
}

#[test]
fn append_and_dedup_describe_same_triangles() {
    let g = grid_from(3, 2, 2, &[1, 1, 0, 2, 1, 0, 0, 3, 1, 1, 2, 0]);
    let a = generate_mesh(&g, MeshConfig::APPEND).unwrap();
    let d = generate_mesh(&g, MeshConfig::DEDUP).unwrap();
    assert!(d.vertex_count() < a.vertex_count());
    let ta: Vec<_> = a.triangle_positions().collect();
    let td: Vec<_> = d.triangle_positions().collect();
    assert_eq!(ta, td);
}
