use crate::rendering::pixel_renderer::RasterBuffer;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, ContextAttributes2d, HtmlCanvasElement, ImageData};

/// Copies a rendered frame onto the canvas.
pub fn blit_buffer(canvas: &HtmlCanvasElement, buffer: &RasterBuffer) {
    let attrs = ContextAttributes2d::new();
    attrs.set_will_read_frequently(true);

    let context = canvas
        .get_context_with_context_options("2d", &attrs)
        .expect("Failed to get context")
        .expect("Context is None")
        .dyn_into::<CanvasRenderingContext2d>()
        .expect("Failed to cast to 2D context");

    let image_data = ImageData::new_with_u8_clamped_array_and_sh(
        Clamped(buffer.pixels()),
        buffer.width(),
        buffer.height(),
    )
    .expect("Failed to create ImageData");

    context
        .put_image_data(&image_data, 0.0, 0.0)
        .expect("Failed to put image data");
}
