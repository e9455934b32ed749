// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs

pub use copy::copy;
pub use export::export;

use crate::{gui::app::App, table::Table};

/// The current page's table, unless it has no rows.
#[inline]
pub(super) fn current_table(app: &App) -> Option<Table> {
    app.page.table().filter(|t| !t.is_empty())
}
