// src/gui/mod.rs
pub mod actions;
pub mod app;
pub mod components;
pub mod fonts;
pub mod pages;
pub mod router;
pub mod task;
pub mod thumbs;

pub use app::run;
