// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!("Export: Out path set → {}", app.state.options.export.out_path().display());
        app.out_path_dirty = false;
        app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
    }

    let Some(table) = super::current_table(app) else {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("내보낼 데이터가 없습니다");
        return;
    };

    let export = &app.state.options.export;
    logf!(
        "Export: Begin page={:?}, rows={}, headers={}, format={:?}",
        app.route.kind(),
        table.len(),
        table.headers.len(),
        export.format
    );

    let msg = match file::write_export(export, &table) {
        Ok(path) => {
            logf!("Export: OK {}", path.display());
            format!("{}행 내보냄: {}", table.len(), path.display())
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("내보내기 오류: {e}")
        }
    };
    app.status(msg);
}
