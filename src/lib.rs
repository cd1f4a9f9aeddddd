pub mod api;
pub mod config;
pub mod controller;
pub mod render;
pub mod theme;
pub mod types;
#[cfg(any(feature = "web", feature = "desktop"))]
pub mod ui;
