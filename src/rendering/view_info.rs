use crate::rendering::viewport::Viewport;

/// Viewport state formatted for the info overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewInfo {
    /// Plane coordinate of the center pixel, formatted for display
    pub center_display: String,

    /// Zoom level in scientific notation
    pub zoom_display: String,

    /// Escape-time iteration cap
    pub max_iterations: u32,

    /// Last frame's render time (filled by the canvas shell after render)
    pub render_time_ms: Option<f64>,
}

impl ViewInfo {
    pub fn new(viewport: &Viewport, max_iterations: u32, render_time_ms: Option<f64>) -> Self {
        let center = viewport.center();
        Self {
            center_display: format!("{:.6}, {:.6}", center.x(), center.y()),
            zoom_display: format!("{:.2e}", viewport.zoom()),
            max_iterations,
            render_time_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::config::ExplorerConfig;

    #[test]
    fn test_view_info_formats_defaults() {
        let viewport = Viewport::from_config(&ExplorerConfig::default());
        let info = ViewInfo::new(&viewport, 500, None);

        // Center of the default view: (-2.5 + 500/200, 1.7 - 750/200)
        assert_eq!(info.center_display, "0.000000, -2.050000");
        assert_eq!(info.zoom_display, "2.00e2");
        assert_eq!(info.max_iterations, 500);
        assert_eq!(info.render_time_ms, None);
    }

    #[test]
    fn test_view_info_carries_render_time() {
        let viewport = Viewport::from_config(&ExplorerConfig::default());
        let info = ViewInfo::new(&viewport, 500, Some(12.5));
        assert_eq!(info.render_time_ms, Some(12.5));
    }
}
