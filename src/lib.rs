// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod api;
pub mod chart;
pub mod config;
pub mod csv;
pub mod file;
pub mod filters;
pub mod format;
pub mod gui;
pub mod model;
pub mod paging;
pub mod store;
pub mod table;

#[cfg(feature = "cli")]
pub mod cli;
