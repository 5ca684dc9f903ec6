// src/models/mod.rs

pub mod api;
pub mod app;
pub mod lighthouse;
pub mod views;

pub use app::AppState;
