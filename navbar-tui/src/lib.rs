pub mod config;
pub mod fixtures;
pub mod keys;
pub mod ui;

pub use config::Settings;
pub use ui::widgets;
