use crate::domain::ports::Catalog;
use crate::utils::error::{Result, ScoutError};
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_CATALOG_URL: &str = "https://mods.curse.com/addons/wow";

/// 透過 HTTP GET 取得 Curse 專案頁面
pub struct CurseCatalog {
    base_url: String,
    client: Client,
}

impl CurseCatalog {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl Catalog for CurseCatalog {
    fn page_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }

    async fn fetch_page(&self, url: &str) -> Result<String> {
        tracing::debug!("Making catalog request to: {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Catalog response status: {}", status);

        // 讀取 body 失敗同樣視為致命錯誤
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!("Wrong status code: {}", status);
            return Err(ScoutError::CatalogStatusError {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
