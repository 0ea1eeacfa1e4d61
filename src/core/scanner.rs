use crate::core::parser::{parse_packaged_version, parse_project_id};
use crate::domain::model::Package;
use crate::utils::error::{Result, ScoutError};
use std::collections::HashSet;
use std::fs::{self, FileType};
use std::path::{Path, PathBuf};

/// Lists `dir` sorted by file name, mapping failures to a directory read error.
///
/// File types come from the entry itself, so symlinks are reported as symlinks.
fn sorted_entries(dir: &Path) -> Result<Vec<(PathBuf, FileType)>> {
    let to_error = |source| ScoutError::DirectoryReadError {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(to_error)? {
        let entry = entry.map_err(to_error)?;
        let file_type = entry.file_type().map_err(to_error)?;
        entries.push((entry.path(), file_type));
    }
    entries.sort_by(|(a, _), (b, _)| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}

fn has_metadata_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(extension))
}

/// 從單一 metadata 檔內容建立紀錄；沒有 id 就回傳 None
pub fn package_from_metadata(addon_name: &str, metadata: &str) -> Option<Package> {
    let Some(id) = parse_project_id(metadata) else {
        tracing::warn!("Didn't find X-Curse-Project-ID for addon: {}", addon_name);
        return None;
    };

    let local_version = parse_packaged_version(metadata).unwrap_or_else(|| {
        tracing::warn!(
            "Didn't find X-Curse-Packaged-Version for addon: {} (id {})",
            addon_name,
            id
        );
        String::new()
    });

    Some(Package { id, local_version })
}

/// Scans each immediate subdirectory of `root` for metadata files.
///
/// Records are returned in scan order and unique by id; the first one seen wins.
/// Any directory or file that cannot be read aborts the scan.
pub fn scan_addons(root: &Path, extension: &str) -> Result<Vec<Package>> {
    let mut packages = Vec::new();
    let mut seen = HashSet::new();

    for (addon_dir, file_type) in sorted_entries(root)? {
        // 根目錄下的一般檔案不是插件；symlink 交給 read_dir 判斷
        if file_type.is_file() {
            tracing::debug!("Skipping file {} in addons root", addon_dir.display());
            continue;
        }

        let addon_name = addon_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        for (file, file_type) in sorted_entries(&addon_dir)? {
            if file_type.is_dir() || !has_metadata_extension(&file, extension) {
                continue;
            }

            let metadata = fs::read(&file).map_err(|source| ScoutError::FileReadError {
                path: file.clone(),
                source,
            })?;
            let metadata = String::from_utf8_lossy(&metadata);

            let Some(package) = package_from_metadata(&addon_name, &metadata) else {
                continue;
            };

            if seen.insert(package.id.clone()) {
                tracing::debug!(
                    "Found {} ({}) in {}",
                    package.id,
                    package.local_version,
                    file.display()
                );
                packages.push(package);
            } else {
                tracing::debug!("Duplicate id {} in {}, ignored", package.id, file.display());
            }
        }
    }

    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_toc(root: &Path, addon: &str, file: &str, content: &str) {
        let dir = root.join(addon);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file), content).unwrap();
    }

    #[test]
    fn test_scan_single_addon_trims_carriage_return() {
        let temp_dir = TempDir::new().unwrap();
        write_toc(
            temp_dir.path(),
            "AddonA",
            "AddonA.toc",
            "## X-Curse-Project-ID: 123\r\n## X-Curse-Packaged-Version: 1.0\r\n",
        );

        let packages = scan_addons(temp_dir.path(), ".toc").unwrap();
        assert_eq!(packages, vec![Package::new("123", "1.0")]);
    }

    fn toc(id: &str, version: &str) -> String {
        format!(
            "X-Curse-Project-ID: {}\nX-Curse-Packaged-Version: {}\n",
            id, version
        )
    }

    #[test]
    fn test_scan_skips_files_without_id() {
        let temp_dir = TempDir::new().unwrap();
        write_toc(temp_dir.path(), "AddonA", "AddonA.toc", &toc("1", "1.0"));
        write_toc(temp_dir.path(), "AddonB", "AddonB.toc", "## Title: No id here\n");
        write_toc(temp_dir.path(), "AddonC", "AddonC.toc", &toc("3", "3.0"));

        let packages = scan_addons(temp_dir.path(), ".toc").unwrap();
        let ids: Vec<&str> = packages.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_scan_keeps_first_duplicate_id() {
        let temp_dir = TempDir::new().unwrap();
        write_toc(temp_dir.path(), "AddonA", "AddonA.toc", &toc("999", "1.0"));
        write_toc(temp_dir.path(), "AddonB", "AddonB.toc", &toc("999", "2.0"));

        let packages = scan_addons(temp_dir.path(), ".toc").unwrap();
        assert_eq!(packages, vec![Package::new("999", "1.0")]);
    }

    #[test]
    fn test_scan_ignores_other_extensions_and_root_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("stray.toc"), "X-Curse-Project-ID: 5\n").unwrap();
        write_toc(temp_dir.path(), "AddonA", "AddonA.lua", "X-Curse-Project-ID: 7\n");
        write_toc(temp_dir.path(), "AddonA", "AddonA.toc", &toc("8", "8.0"));

        let packages = scan_addons(temp_dir.path(), ".toc").unwrap();
        assert_eq!(packages, vec![Package::new("8", "8.0")]);
    }

    #[test]
    fn test_scan_skips_directory_named_like_metadata() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("AddonA").join("Locale.toc")).unwrap();
        write_toc(temp_dir.path(), "AddonA", "AddonA.toc", &toc("8", "8.0"));

        let packages = scan_addons(temp_dir.path(), ".toc").unwrap();
        assert_eq!(packages, vec![Package::new("8", "8.0")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_dangling_metadata_symlink_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let addon_dir = temp_dir.path().join("AddonA");
        fs::create_dir_all(&addon_dir).unwrap();
        let missing = temp_dir.path().join("missing.toc");
        std::os::unix::fs::symlink(missing, addon_dir.join("AddonA.toc")).unwrap();

        let err = scan_addons(temp_dir.path(), ".toc").unwrap_err();
        match err {
            ScoutError::FileReadError { path, .. } => {
                assert_eq!(path, addon_dir.join("AddonA.toc"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_unlistable_addon_directory_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        write_toc(temp_dir.path(), "AddonA", "AddonA.toc", &toc("1", "1.0"));
        let gone = temp_dir.path().join("gone");
        std::os::unix::fs::symlink(gone, temp_dir.path().join("AddonB")).unwrap();

        let err = scan_addons(temp_dir.path(), ".toc").unwrap_err();
        match err {
            ScoutError::DirectoryReadError { path, .. } => {
                assert_eq!(path, temp_dir.path().join("AddonB"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_follows_symlinked_addon_directory() {
        let temp_dir = TempDir::new().unwrap();
        let real = TempDir::new().unwrap();
        write_toc(real.path(), "AddonA", "AddonA.toc", &toc("1", "1.0"));
        let target = real.path().join("AddonA");
        std::os::unix::fs::symlink(target, temp_dir.path().join("AddonA")).unwrap();

        let packages = scan_addons(temp_dir.path(), ".toc").unwrap();
        assert_eq!(packages, vec![Package::new("1", "1.0")]);
    }

    #[test]
    fn test_scan_keeps_record_without_version() {
        let temp_dir = TempDir::new().unwrap();
        write_toc(temp_dir.path(), "AddonA", "AddonA.toc", "X-Curse-Project-ID: 42\n");

        let packages = scan_addons(temp_dir.path(), ".toc").unwrap();
        assert_eq!(packages, vec![Package::new("42", "")]);
    }

    #[test]
    fn test_scan_missing_root_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        let err = scan_addons(&missing, ".toc").unwrap_err();
        assert!(matches!(err, ScoutError::DirectoryReadError { .. }));
    }

    #[test]
    fn test_package_from_metadata_without_id() {
        assert_eq!(package_from_metadata("Bagnon", "## Title: Bagnon\n"), None);
    }
}
