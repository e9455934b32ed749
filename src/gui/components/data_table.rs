// src/gui/components/data_table.rs
//
// Draws a `Table` with egui_extras. Numeric-looking columns are right-aligned,
// text columns left-aligned. Optional per-row action buttons report back
// which row/action was clicked.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::table::Table;

const ROW_H: f32 = 22.0;
const HEADER_H: f32 = 24.0;

/// Per-table knobs.
#[derive(Default)]
pub struct TableOpts<'a> {
    /// Button labels drawn in a trailing column.
    pub actions: &'a [&'a str],
    /// Preferred widths by column; missing entries use a guess.
    pub widths: &'a [f32],
    /// Cap the table height (rows scroll inside).
    pub max_height: Option<f32>,
    /// Optional per-cell color: `(row, col, text) -> color`.
    pub tint: Option<&'a dyn Fn(usize, usize, &str) -> Option<egui::Color32>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowAction {
    pub row: usize,
    pub action: usize,
}

fn looks_numeric(cell: &str) -> bool {
    let t = cell.trim_start_matches(['-', '₩']).trim_end_matches('%');
    !t.is_empty() && t.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '.')
}

fn guess_width(table: &Table, col: usize) -> f32 {
    let longest = std::iter::once(table.headers.get(col).map(String::as_str).unwrap_or(""))
        .chain(table.rows.iter().take(50).filter_map(|r| r.get(col).map(String::as_str)))
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(4);
    (longest as f32 * 7.5 + 16.0).clamp(40.0, 360.0)
}

pub fn show(ui: &mut egui::Ui, id_salt: &str, table: &Table) {
    let _ = show_with(ui, id_salt, table, TableOpts::default());
}

pub fn show_with(ui: &mut egui::Ui, id_salt: &str, table: &Table, opts: TableOpts<'_>) -> Option<RowAction> {
    if table.is_empty() {
        ui.weak("데이터가 없습니다.");
        return None;
    }

    let cols = table.headers.len();
    let numeric: Vec<bool> = (0..cols)
        .map(|ci| {
            let sample: Vec<&String> = table.rows.iter().filter_map(|r| r.get(ci)).filter(|c| !c.is_empty()).take(20).collect();
            !sample.is_empty() && sample.iter().all(|c| looks_numeric(c))
        })
        .collect();

    let mut clicked: Option<RowAction> = None;
    let mut builder = TableBuilder::new(ui)
        .id_salt(id_salt)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .min_scrolled_height(0.0);
    if let Some(h) = opts.max_height {
        builder = builder.max_scroll_height(h);
    }
    for ci in 0..cols {
        let w = opts.widths.get(ci).copied().unwrap_or_else(|| guess_width(table, ci));
        builder = builder.column(Column::initial(w).at_least(30.0).clip(true));
    }
    if !opts.actions.is_empty() {
        builder = builder.column(Column::auto().at_least(60.0));
    }

    builder
        .header(HEADER_H, |mut header| {
            for h in &table.headers {
                header.col(|ui| {
                    ui.add(egui::Label::new(RichText::new(h).strong()).selectable(false));
                });
            }
            if !opts.actions.is_empty() {
                header.col(|_| {});
            }
        })
        .body(|body| {
            body.rows(ROW_H, table.rows.len(), |mut row| {
                let ri = row.index();
                let data = &table.rows[ri];
                for ci in 0..cols {
                    let cell = data.get(ci).map(String::as_str).unwrap_or("");
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        let mut rt = RichText::new(cell);
                        if let Some(color) = opts.tint.and_then(|f| f(ri, ci, cell)) {
                            rt = rt.color(color);
                        }
                        if numeric.get(ci).copied().unwrap_or(false) {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(rt);
                            });
                        } else {
                            ui.label(rt).on_hover_text(cell);
                        }
                    });
                }
                if !opts.actions.is_empty() {
                    row.col(|ui| {
                        for (ai, label) in opts.actions.iter().enumerate() {
                            if ui.small_button(*label).clicked() {
                                clicked = Some(RowAction { row: ri, action: ai });
                            }
                        }
                    });
                }
            });
        });

    clicked
}

#[cfg(test)]
mod tests {
    use super::looks_numeric;

    #[test]
    fn numeric_detection_handles_money_and_percent() {
        assert!(looks_numeric("₩1,234,000"));
        assert!(looks_numeric("-30%"));
        assert!(looks_numeric("12.5"));
        assert!(!looks_numeric("KR"));
        assert!(!looks_numeric(""));
    }
}
