pub mod app;
pub mod controls_panel;
pub mod points_display;
pub mod remaining_display;

pub use app::App;
