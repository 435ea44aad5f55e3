use std::time::Duration;

// Scene constants
const FOCAL_LENGTH: f32 = 120.0;
const SAMPLE_RESOLUTION: u32 = 45;
const CUBE_SIZE: f32 = 1000.0;
const CAMERA_Z: f32 = -5000.0;
const FRAME_DELAY_MS: u64 = 10;

/// Configuration for the cube scene
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub focal_length: f32,
    pub sample_resolution: u32,  // Grid cells per face edge
    pub cube_size: f32,
    pub camera_z: f32,           // Camera sits on the Z axis
    pub frame_delay: Duration,
}

impl SceneConfig {
    /// Distance between neighbouring sample points on a face
    pub fn sample_step(&self) -> f32 {
        self.cube_size / self.sample_resolution.max(1) as f32
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            focal_length: FOCAL_LENGTH,
            sample_resolution: SAMPLE_RESOLUTION,
            cube_size: CUBE_SIZE,
            camera_z: CAMERA_Z,
            frame_delay: Duration::from_millis(FRAME_DELAY_MS),
        }
    }
}
