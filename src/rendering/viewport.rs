use crate::rendering::config::ExplorerConfig;
use crate::rendering::points::Point;

/// Pan direction for the four keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

/// The window onto the complex plane currently mapped to the pixel raster.
///
/// `top_left` is the plane coordinate of pixel (0, 0); `zoom` is pixels per
/// plane unit and must stay positive. The imaginary axis decreases downward,
/// matching the usual mathematical orientation.
///
/// Zoom is unbounded in both directions. Past roughly 1e14 the plane span per
/// pixel drops below f64 granularity and the image degrades into flat blocks;
/// that is a display artifact, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    top_left: Point,
    zoom: f64,
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(top_left: Point, zoom: f64, width: u32, height: u32) -> Self {
        Self {
            top_left,
            zoom,
            width,
            height,
        }
    }

    pub fn from_config(config: &ExplorerConfig) -> Self {
        Self::new(config.top_left, config.zoom, config.width, config.height)
    }

    pub fn top_left(&self) -> Point {
        self.top_left
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Maps a pixel coordinate to its plane coordinate.
    ///
    /// Out-of-range pixel inputs extrapolate linearly; the mapping is total.
    pub fn pixel_to_point(&self, px: f64, py: f64) -> Point {
        Point::new(
            px / self.zoom + self.top_left.x(),
            self.top_left.y() - py / self.zoom,
        )
    }

    /// Plane coordinate of the center pixel.
    pub fn center(&self) -> Point {
        self.pixel_to_point(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    /// Rescales to `new_zoom`, moving the plane point under pixel `(px, py)`
    /// to the viewport center.
    ///
    /// The shift happens at the old scale before the zoom changes, then the
    /// recenter at the new scale; reordering these steps moves the target
    /// point off-center.
    pub fn zoom_at(&mut self, px: f64, py: f64, new_zoom: f64) {
        self.top_left = Point::new(
            self.top_left.x() + px / self.zoom,
            self.top_left.y() - py / self.zoom,
        );

        self.zoom = new_zoom;
        self.top_left = Point::new(
            self.top_left.x() - (self.width as f64 / 2.0) / self.zoom,
            self.top_left.y() + (self.height as f64 / 2.0) / self.zoom,
        );
    }

    /// Moves the view by one sixth of the visible span along one axis.
    pub fn pan(&mut self, direction: PanDirection) {
        let step_x = (self.width as f64 / self.zoom) / 6.0;
        let step_y = (self.height as f64 / self.zoom) / 6.0;

        self.top_left = match direction {
            PanDirection::Up => Point::new(self.top_left.x(), self.top_left.y() + step_y),
            PanDirection::Down => Point::new(self.top_left.x(), self.top_left.y() - step_y),
            PanDirection::Left => Point::new(self.top_left.x() - step_x, self.top_left.y()),
            PanDirection::Right => Point::new(self.top_left.x() + step_x, self.top_left.y()),
        };
    }
}
