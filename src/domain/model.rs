/// 掃描階段產生的插件紀錄（尚未查詢遠端版本）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub id: String,
    pub local_version: String,
}

impl Package {
    pub fn new(id: impl Into<String>, local_version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            local_version: local_version.into(),
        }
    }

    /// Builds the enriched copy; the scanned record itself is left untouched.
    pub fn checked(&self, catalog_url: String, remote_version: Option<String>) -> CheckedPackage {
        let is_outdated = remote_version
            .as_deref()
            .is_some_and(|remote| remote != self.local_version);

        CheckedPackage {
            id: self.id.clone(),
            local_version: self.local_version.clone(),
            remote_version,
            is_outdated,
            catalog_url,
        }
    }
}

/// 查詢目錄頁面後的插件紀錄
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedPackage {
    pub id: String,
    pub local_version: String,
    /// `None` when the catalog page had no newest-file entry.
    pub remote_version: Option<String>,
    pub is_outdated: bool,
    pub catalog_url: String,
}

impl CheckedPackage {
    pub fn is_unknown(&self) -> bool {
        self.remote_version.is_none()
    }
}

/// Report partitions, each kept in scan order.
#[derive(Debug, Clone, Default)]
pub struct ReportSummary {
    pub outdated: Vec<CheckedPackage>,
    pub up_to_date: Vec<CheckedPackage>,
    pub unknown: Vec<CheckedPackage>,
}

impl ReportSummary {
    pub fn total(&self) -> usize {
        self.outdated.len() + self.up_to_date.len() + self.unknown.len()
    }
}
