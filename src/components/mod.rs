pub mod app;
pub mod board;
pub mod completion_banner;
pub mod controls_panel;
pub mod tile;
pub mod upload_panel;

pub use app::App;
