use crate::domain::model::{CheckedPackage, Package, ReportSummary};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub trait Storage: Send + Sync {
    /// Writes `data`, flushes and syncs it, and returns the written path.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<PathBuf>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn addons_directory(&self) -> &Path;
    fn metadata_extension(&self) -> &str;
    fn catalog_url(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn open_report(&self) -> bool;
}

/// 目錄服務：回傳某個專案 id 的頁面內容
#[async_trait]
pub trait Catalog: Send + Sync {
    fn page_url(&self, id: &str) -> String;
    async fn fetch_page(&self, url: &str) -> Result<String>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Package>>;
    async fn transform(&self, packages: Vec<Package>) -> Result<Vec<CheckedPackage>>;
    async fn load(&self, summary: ReportSummary) -> Result<PathBuf>;
}
