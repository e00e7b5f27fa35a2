pub mod app;
pub mod code_theme;
