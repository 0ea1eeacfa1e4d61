use std::path::Path;

/// 用系統預設程式開啟報告；失敗時只記錄，不中斷流程
pub fn open_best_effort(path: &Path) {
    match open::that(path) {
        Ok(()) => tracing::debug!("Opened {} in the default viewer", path.display()),
        Err(e) => tracing::debug!("Could not open {}: {}", path.display(), e),
    }
}
