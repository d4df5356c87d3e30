// UI modules
pub mod app;
pub mod nav;
pub mod theme;
pub mod viewport;
pub mod widgets;

// Main entry point
pub mod render_loop;

pub use app::App;
pub use render_loop::run_app;
