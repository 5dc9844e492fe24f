use crate::rendering::ViewInfo;
use leptos::*;

/// Passive overlay along the bottom edge showing the current view state.
#[component]
pub fn InfoPanel(info: ReadSignal<ViewInfo>) -> impl IntoView {
    let line = move || {
        let info = info.get();
        let render_time = info
            .render_time_ms
            .map(|ms| format!(" - {ms:.1} ms"))
            .unwrap_or_default();

        format!(
            "Center {} - Zoom {} - {} iterations{}",
            info.center_display, info.zoom_display, info.max_iterations, render_time
        )
    };

    view! {
      <div class="fixed inset-x-0 bottom-0 bg-black/50 backdrop-blur-sm px-4 py-3">
        <div class="text-center text-white text-sm">{line}</div>
      </div>
    }
}
