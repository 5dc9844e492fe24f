use crate::rendering::points::Point;

const DEFAULT_WIDTH: u32 = 1000;
const DEFAULT_HEIGHT: u32 = 1500;
const DEFAULT_MAX_ITERATIONS: u32 = 500;
const DEFAULT_ZOOM: f64 = 200.0;
const DEFAULT_TOP_LEFT_X: f64 = -2.5;
const DEFAULT_TOP_LEFT_Y: f64 = 1.7;

/// Startup configuration for one explorer instance.
///
/// Everything here is fixed at construction time. Nothing is a process-wide
/// static, so independent viewports (and their tests) can coexist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// Escape-time iteration cap; reaching it classifies a point as inside the set.
    pub max_iterations: u32,
    /// Initial zoom in pixels per plane unit.
    pub zoom: f64,
    /// Plane coordinate of pixel (0, 0) at startup.
    pub top_left: Point,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            zoom: DEFAULT_ZOOM,
            top_left: Point::new(DEFAULT_TOP_LEFT_X, DEFAULT_TOP_LEFT_Y),
        }
    }
}
