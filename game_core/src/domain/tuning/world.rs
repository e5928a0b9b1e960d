// World and camera tuning.

#[derive(Debug, Clone, Copy)]
pub struct WorldTuning {
    /// World bounds in pixels, anchored at the origin.
    pub width: f32,
    pub height: f32,

    pub camera_zoom: f32,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            width: 1600.0,
            height: 1200.0,
            camera_zoom: 0.5,
        }
    }
}
