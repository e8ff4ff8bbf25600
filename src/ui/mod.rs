//! TUI 层：Ratatui + crossterm，主循环（app）、表单（form）、事件（event）、渲染（render）

pub mod app;
pub mod event;
pub mod form;
pub mod render;

pub use app::run_app;
pub use event::EventHandler;
pub use form::{FormFocus, InputForm};
pub use render::draw;
