#![warn(clippy::all, rust_2018_idioms)]

mod app;
pub mod config;
pub mod field;
pub mod menu;
pub mod render;
pub mod scene;
pub mod showcase;
pub mod surface;

pub use app::DotFieldApp;
