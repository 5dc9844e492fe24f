pub mod canvas_utils;
pub mod colorizers;
pub mod config;
pub mod mandelbrot;
pub mod pixel_renderer;
pub mod point_compute;
pub mod points;
pub mod view_info;
pub mod viewport;

pub use canvas_utils::blit_buffer;
pub use colorizers::{
    banded_colorizer, default_color_scheme, get_color_scheme, grayscale_colorizer, ColorScheme,
    Colorizer,
};
pub use config::ExplorerConfig;
pub use mandelbrot::{MandelbrotComputer, MandelbrotData};
pub use pixel_renderer::{PixelRenderer, RasterBuffer};
pub use point_compute::PointComputer;
pub use points::Point;
pub use view_info::ViewInfo;
pub use viewport::{PanDirection, Viewport};
