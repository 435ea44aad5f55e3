//! 3D points and axis rotations

use std::ops::Add;

/// A point (or offset) in world space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const ORIGIN: Point3 = Point3 { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Add for Point3 {
    type Output = Point3;

    fn add(self, other: Point3) -> Point3 {
        Point3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

/// Rotate about the X axis. Y and Z mix, X is unchanged.
pub fn rotate_x(v: Point3, angle: f32) -> Point3 {
    let (sin_a, cos_a) = angle.sin_cos();
    Point3::new(
        v.x,
        v.y * cos_a - v.z * sin_a,
        v.y * sin_a + v.z * cos_a,
    )
}

/// Rotate about the Y axis. X and Z mix, Y is unchanged.
pub fn rotate_y(v: Point3, angle: f32) -> Point3 {
    let (sin_a, cos_a) = angle.sin_cos();
    Point3::new(
        v.x * cos_a + v.z * sin_a,
        v.y,
        -v.x * sin_a + v.z * cos_a,
    )
}

/// Rotate about the Z axis. X and Y mix, Z is unchanged.
pub fn rotate_z(v: Point3, angle: f32) -> Point3 {
    let (sin_a, cos_a) = angle.sin_cos();
    Point3::new(
        v.x * cos_a - v.y * sin_a,
        v.x * sin_a + v.y * cos_a,
        v.z,
    )
}
