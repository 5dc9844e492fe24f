use crate::rendering::{
    blit_buffer, default_color_scheme, ExplorerConfig, MandelbrotComputer, PanDirection,
    PixelRenderer, Viewport,
};
use leptos::*;
use log::debug;
use wasm_bindgen::{closure::Closure, JsCast};

/// Fixed-size canvas that owns the event-to-action dispatch.
///
/// Primary button doubles the zoom at the cursor, secondary button halves it,
/// and WASD (or the arrow keys) pan by a sixth of the visible span. Every
/// viewport change re-renders the full frame.
#[component]
pub fn ExplorerCanvas(
    config: ExplorerConfig,
    viewport: ReadSignal<Viewport>,
    set_viewport: WriteSignal<Viewport>,
    set_render_time_ms: WriteSignal<Option<f64>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<leptos::html::Canvas>();

    let renderer = store_value(PixelRenderer::new(
        MandelbrotComputer::new(config.max_iterations),
        default_color_scheme().colorizer,
    ));

    // Pan keys arrive on the window, not the canvas
    create_effect(move |_| {
        let keydown = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
            let direction = match event.key().as_str() {
                "w" | "ArrowUp" => Some(PanDirection::Up),
                "a" | "ArrowLeft" => Some(PanDirection::Left),
                "s" | "ArrowDown" => Some(PanDirection::Down),
                "d" | "ArrowRight" => Some(PanDirection::Right),
                _ => None,
            };

            if let Some(direction) = direction {
                set_viewport.update(|vp| vp.pan(direction));
            }
        }) as Box<dyn Fn(web_sys::KeyboardEvent)>);

        web_sys::window()
            .expect("should have window")
            .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
            .expect("should add keydown listener");

        keydown.forget();
    });

    // Effect: Render whenever the viewport changes
    create_effect(move |_| {
        let vp = viewport.get();

        if let Some(canvas_el) = canvas_ref.get() {
            let canvas = canvas_el.unchecked_ref::<web_sys::HtmlCanvasElement>();

            let start = web_sys::window().unwrap().performance().unwrap().now();

            let buffer = renderer.with_value(|r| r.render(&vp));
            blit_buffer(canvas, &buffer);

            let elapsed = web_sys::window().unwrap().performance().unwrap().now() - start;
            debug!("rendered {}x{} frame in {elapsed:.1} ms", vp.width(), vp.height());
            set_render_time_ms.set(Some(elapsed));
        }
    });

    let on_mousedown = move |e: web_sys::MouseEvent| {
        let px = e.offset_x() as f64;
        let py = e.offset_y() as f64;

        match e.button() {
            0 => set_viewport.update(|vp| {
                let zoom = vp.zoom();
                vp.zoom_at(px, py, zoom * 2.0);
            }),
            2 => set_viewport.update(|vp| {
                let zoom = vp.zoom();
                vp.zoom_at(px, py, zoom / 2.0);
            }),
            _ => {}
        }
    };

    view! {
        <canvas
            node_ref=canvas_ref
            width=config.width
            height=config.height
            class="block"
            on:mousedown=on_mousedown
            on:contextmenu=move |e| e.prevent_default()
        />
    }
}
