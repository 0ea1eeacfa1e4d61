use crate::core::catalog::CurseCatalog;
use crate::core::parser::parse_newest_version;
use crate::core::report::{console_lines, render_html, REPORT_FILE};
use crate::core::scanner::scan_addons;
use crate::core::{
    Catalog, CheckedPackage, ConfigProvider, Package, Pipeline, ReportSummary, Storage,
};
use crate::utils::error::Result;
use crate::utils::opener::open_best_effort;
use chrono::Utc;
use std::path::PathBuf;

pub struct AddonPipeline<S: Storage, C: ConfigProvider, K: Catalog = CurseCatalog> {
    storage: S,
    config: C,
    catalog: K,
}

impl<S: Storage, C: ConfigProvider> AddonPipeline<S, C, CurseCatalog> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let catalog = CurseCatalog::new(config.catalog_url(), config.user_agent())?;
        Ok(Self::with_catalog(storage, config, catalog))
    }
}

impl<S: Storage, C: ConfigProvider, K: Catalog> AddonPipeline<S, C, K> {
    pub fn with_catalog(storage: S, config: C, catalog: K) -> Self {
        Self {
            storage,
            config,
            catalog,
        }
    }

    /// 查詢單一插件的目錄頁面並產生新的紀錄
    pub async fn check_package(&self, package: &Package) -> Result<CheckedPackage> {
        let url = self.catalog.page_url(&package.id);
        let page = self.catalog.fetch_page(&url).await?;
        let remote_version = parse_newest_version(&page);

        if remote_version.is_none() {
            tracing::warn!(
                "No newest file entry on the catalog page for {} ({})",
                package.id,
                url
            );
        }

        Ok(package.checked(url, remote_version))
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, K: Catalog> Pipeline for AddonPipeline<S, C, K> {
    async fn extract(&self) -> Result<Vec<Package>> {
        let root = self.config.addons_directory();
        tracing::debug!("Scanning {}", root.display());
        scan_addons(root, self.config.metadata_extension())
    }

    async fn transform(&self, packages: Vec<Package>) -> Result<Vec<CheckedPackage>> {
        let mut checked = Vec::with_capacity(packages.len());

        // 依掃描順序逐一查詢，任一失敗即中止整批
        for package in &packages {
            checked.push(self.check_package(package).await?);
        }

        Ok(checked)
    }

    async fn load(&self, summary: ReportSummary) -> Result<PathBuf> {
        let html = render_html(&summary, Utc::now());

        for line in console_lines(&summary) {
            println!("{}", line);
        }

        tracing::debug!("Writing report ({} bytes)", html.len());
        let path = self
            .storage
            .write_file(REPORT_FILE, html.as_bytes())
            .await?;

        if self.config.open_report() {
            open_best_effort(&path);
        }

        Ok(path)
    }
}
