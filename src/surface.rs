//! A single textured face of the cube

use crate::geometry::{rotate_x, rotate_y, Point3};

/// One flat face, positioned by a fixed local rotation and the shared cube rotation
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    pub origin: Point3,          // Parent frame origin (world origin in this scene)
    pub local_offset: Point3,    // Face offset from the cube centre before rotation
    pub global_rotation: Point3, // Whole-cube rotation in radians, per axis
    pub local_rotation: Point3,  // Orients this face relative to the cube
    pub glyph: &'static str,
    pub color_id: u8,
}

impl Surface {
    /// Orient a point in face space: local X, local Y, then global X, global Y.
    ///
    /// The Z components of both rotations are carried but never applied.
    pub fn orient(&self, p: Point3) -> Point3 {
        let p = rotate_x(p, self.local_rotation.x);
        let p = rotate_y(p, self.local_rotation.y);
        let p = rotate_x(p, self.global_rotation.x);
        rotate_y(p, self.global_rotation.y)
    }

    /// Face-space point in world space, relative to the parent origin
    pub fn world_point(&self, p: Point3) -> Point3 {
        self.orient(p) + self.origin
    }

    /// Face offset after all orientation is applied.
    ///
    /// Only used as a depth key: its `z` approximates the face's distance
    /// along the view axis.
    pub fn relative_position(&self) -> Point3 {
        self.orient(self.local_offset)
    }
}
