//! Perspective projection and glyph rasterization

use crate::colors;
use crate::config::SceneConfig;
use crate::geometry::Point3;
use crate::surface::Surface;
use crate::terminal::Terminal;

// Terminal cells are roughly twice as tall as they are wide
const ASPECT_CORRECTION: f32 = 2.0;
const MIN_Z_DIVISOR: f32 = 1e-6;

/// Project a world-space point onto the screen.
///
/// Returns `None` when the point lies in the camera plane or the result is
/// not finite; callers treat that as out of view.
pub fn project(vertex: Point3, config: &SceneConfig, width: u16, height: u16) -> Option<(i32, i32)> {
    let depth = vertex.z - config.camera_z;
    if depth.abs() < MIN_Z_DIVISOR {
        return None;
    }

    let scale = config.focal_length / depth;
    let half_w = (width / 2) as f32;
    let half_h = (height / 2) as f32;
    let screen_x = vertex.x * scale * ASPECT_CORRECTION + half_w;
    let screen_y = vertex.y * scale + half_h;

    if !screen_x.is_finite() || !screen_y.is_finite() {
        return None;
    }
    // Truncates toward zero; the cast saturates, so far-off points still clip
    Some((screen_x as i32, screen_y as i32))
}

/// Face-space sample grid: (resolution + 1)^2 points on the plane z = size/2
pub fn sample_grid(config: &SceneConfig) -> impl Iterator<Item = Point3> {
    let n = config.sample_resolution;
    let step = config.sample_step();
    let half = config.cube_size / 2.0;

    (0..=n).flat_map(move |i| {
        (0..=n).map(move |j| Point3::new(step * i as f32 - half, step * j as f32 - half, half))
    })
}

/// Draw one surface's glyph at every projected sample point
pub fn draw_surface(term: &mut Terminal, surface: &Surface, config: &SceneConfig) {
    let (width, height) = term.size();
    let pair = colors::pair(surface.color_id);

    for sample in sample_grid(config) {
        let vertex = surface.world_point(sample);
        if let Some((x, y)) = project(vertex, config, width, height) {
            term.set_str(x, y, surface.glyph, pair);
        }
    }
}

/// Draw surfaces in the given order; later ones overwrite earlier ones
pub fn draw_all(term: &mut Terminal, surfaces: &[Surface], config: &SceneConfig) {
    for surface in surfaces {
        draw_surface(term, surface, config);
    }
}
