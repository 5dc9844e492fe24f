pub mod explorer_canvas;
pub mod info_panel;
