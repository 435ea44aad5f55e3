//! Per-frame cube assembly and back-to-front ordering

use crate::colors::Material;
use crate::config::SceneConfig;
use crate::geometry::Point3;
use crate::surface::Surface;
use std::cmp::Ordering;
use std::f32::consts::{FRAC_PI_2, PI};

/// A cube face: glyph, palette entry and fixed orientation (radians)
struct FaceSpec {
    glyph: &'static str,
    material: Material,
    local_rotation: Point3,
}

/// The six faces in creation order: four sides around Y, then top and bottom
const FACES: [FaceSpec; 6] = [
    FaceSpec { glyph: "@@", material: Material::Grass, local_rotation: Point3::new(0.0, 0.0, 0.0) },
    FaceSpec { glyph: "##", material: Material::Dirt, local_rotation: Point3::new(0.0, FRAC_PI_2, 0.0) },
    FaceSpec { glyph: "&&", material: Material::Stone, local_rotation: Point3::new(0.0, PI, 0.0) },
    FaceSpec { glyph: "++", material: Material::Water, local_rotation: Point3::new(0.0, 3.0 * FRAC_PI_2, 0.0) },
    FaceSpec { glyph: "TT", material: Material::Sand, local_rotation: Point3::new(FRAC_PI_2, 0.0, 0.0) },
    FaceSpec { glyph: "%%", material: Material::Crystal, local_rotation: Point3::new(-FRAC_PI_2, 0.0, 0.0) },
];

// X spins four times faster than Y
const X_RADIANS_PER_TICK: f32 = PI / 45.0;
const Y_RADIANS_PER_TICK: f32 = PI / 180.0;

/// Whole-cube rotation at a given tick
pub fn global_rotation(elapsed: u64) -> Point3 {
    let t = elapsed as f32;
    Point3::new(t * X_RADIANS_PER_TICK, t * Y_RADIANS_PER_TICK, 0.0)
}

/// Build the six faces of the cube for a given tick
pub fn assemble(elapsed: u64, config: &SceneConfig) -> Vec<Surface> {
    let global = global_rotation(elapsed);
    let offset = Point3::new(0.0, 0.0, -config.cube_size / 2.0);

    FACES
        .iter()
        .map(|face| Surface {
            origin: Point3::ORIGIN,
            local_offset: offset,
            global_rotation: global,
            local_rotation: face.local_rotation,
            glyph: face.glyph,
            color_id: face.material.id(),
        })
        .collect()
}

/// Painter's order: farthest (smallest relative z) first
pub fn depth_sort(surfaces: &mut [Surface]) {
    surfaces.sort_by(|a, b| {
        let za = a.relative_position().z;
        let zb = b.relative_position().z;
        za.partial_cmp(&zb).unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembles_six_faces() {
        let config = SceneConfig::default();
        for elapsed in [0, 1, 37, 10_000] {
            let surfaces = assemble(elapsed, &config);
            assert_eq!(surfaces.len(), 6);
            for s in &surfaces {
                assert!(!s.glyph.is_empty() && s.glyph.chars().count() <= 2);
                assert!((1..=6).contains(&s.color_id));
                assert_eq!(s.local_offset, Point3::new(0.0, 0.0, -500.0));
                assert_eq!(s.origin, Point3::ORIGIN);
            }
        }
    }

    #[test]
    fn side_faces_turn_in_quarter_steps() {
        let surfaces = assemble(0, &SceneConfig::default());
        let expected = [0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2];
        for (s, want) in surfaces.iter().zip(expected) {
            assert!((s.local_rotation.y - want).abs() < 1e-6);
            assert_eq!(s.local_rotation.x, 0.0);
        }
        assert!((surfaces[4].local_rotation.x - FRAC_PI_2).abs() < 1e-6);
        assert!((surfaces[5].local_rotation.x + FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn glyphs_and_colors_follow_face_table() {
        let surfaces = assemble(0, &SceneConfig::default());
        let glyphs: Vec<&str> = surfaces.iter().map(|s| s.glyph).collect();
        let colors: Vec<u8> = surfaces.iter().map(|s| s.color_id).collect();
        assert_eq!(glyphs, vec!["@@", "##", "&&", "++", "TT", "%%"]);
        assert_eq!(colors, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn global_rotation_tracks_ticks() {
        let r = global_rotation(45);
        assert!((r.x - PI).abs() < 1e-5);
        assert!((r.y - PI / 4.0).abs() < 1e-5);
        assert_eq!(r.z, 0.0);
        assert_eq!(global_rotation(0), Point3::ORIGIN);
    }

    #[test]
    fn all_faces_share_global_rotation() {
        let surfaces = assemble(12, &SceneConfig::default());
        let r = global_rotation(12);
        assert!(surfaces.iter().all(|s| s.global_rotation == r));
    }

    #[test]
    fn assembly_is_idempotent() {
        let config = SceneConfig::default();
        assert_eq!(assemble(321, &config), assemble(321, &config));
    }

    #[test]
    fn depth_sort_orders_far_to_near() {
        let config = SceneConfig::default();
        for elapsed in [0, 5, 17, 90, 200, 1234] {
            let mut surfaces = assemble(elapsed, &config);
            depth_sort(&mut surfaces);

            let depths: Vec<f32> = surfaces.iter().map(|s| s.relative_position().z).collect();
            assert!(depths.windows(2).all(|w| w[0] <= w[1]), "tick {}: {:?}", elapsed, depths);

            let min = depths.iter().cloned().fold(f32::INFINITY, f32::min);
            let max = depths.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
            assert_eq!(depths[0], min);
            assert_eq!(depths[5], max);
        }
    }

    #[test]
    fn unrotated_front_face_draws_first() {
        let mut surfaces = assemble(0, &SceneConfig::default());
        depth_sort(&mut surfaces);
        // The key's offset mirrors the drawn plane: the unrotated face is drawn on the far side
        assert_eq!(surfaces[0].glyph, "@@");
        assert_eq!(surfaces[5].glyph, "&&");
    }
}
