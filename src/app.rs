use crate::components::explorer_canvas::ExplorerCanvas;
use crate::components::info_panel::InfoPanel;
use crate::rendering::{ExplorerConfig, ViewInfo, Viewport};
use leptos::*;

#[component]
pub fn App() -> impl IntoView {
    // ========== Domain state ==========
    let config = ExplorerConfig::default();
    let (viewport, set_viewport) = create_signal(Viewport::from_config(&config));
    let (render_time_ms, set_render_time_ms) = create_signal(None::<f64>);

    // ========== Info overlay ==========
    let (info, set_info) = create_signal(ViewInfo::new(
        &viewport.get_untracked(),
        config.max_iterations,
        None,
    ));

    // Effect: Update view info when viewport or render time changes
    create_effect(move |_| {
        let vp = viewport.get();
        set_info.set(ViewInfo::new(
            &vp,
            config.max_iterations,
            render_time_ms.get(),
        ));
    });

    view! {
        <div class="relative w-screen h-screen overflow-hidden bg-black">
            <ExplorerCanvas
                config=config
                viewport=viewport
                set_viewport=set_viewport
                set_render_time_ms=set_render_time_ms
            />
            <InfoPanel info=info/>
        </div>
    }
}
