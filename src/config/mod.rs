pub mod cli;
pub mod toml_config;

use crate::core::catalog::DEFAULT_CATALOG_URL;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
use clap::Parser;
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

pub const DEFAULT_ADDONS_DIRECTORY: &str = "Interface/AddOns/";
pub const DEFAULT_METADATA_EXTENSION: &str = ".toc";
pub const DEFAULT_USER_AGENT: &str = concat!("addon-scout/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "addon-scout")]
#[command(about = "Compare installed WoW addons against the Curse catalog")]
pub struct CliConfig {
    #[arg(
        long = "addons-directory",
        help = "Path to the Addons folder [default: Interface/AddOns/]"
    )]
    pub addons_directory: Option<PathBuf>,

    #[arg(long, help = "Catalog page prefix; the project id is appended")]
    pub catalog_url: Option<String>,

    #[arg(long, help = "Metadata file suffix [default: .toc]")]
    pub extension: Option<String>,

    #[arg(long, help = "Do not open the report after writing it")]
    pub no_open: bool,

    #[arg(long, help = "Optional TOML settings file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// 合併後的設定：命令列 > 設定檔 > 預設值
#[derive(Debug, Clone)]
pub struct Settings {
    pub addons_directory: PathBuf,
    pub metadata_extension: String,
    pub catalog_url: String,
    pub user_agent: String,
    pub open_report: bool,
}

impl Settings {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path.display());
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        Ok(Self::merge(cli, file))
    }

    pub fn merge(cli: &CliConfig, file: TomlConfig) -> Self {
        Self {
            addons_directory: cli
                .addons_directory
                .clone()
                .or(file.scan.addons_directory)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ADDONS_DIRECTORY)),
            metadata_extension: cli
                .extension
                .clone()
                .or(file.scan.metadata_extension)
                .unwrap_or_else(|| DEFAULT_METADATA_EXTENSION.to_string()),
            catalog_url: cli
                .catalog_url
                .clone()
                .or(file.catalog.base_url)
                .unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string()),
            user_agent: file
                .catalog
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            open_report: !cli.no_open && file.report.open_report.unwrap_or(true),
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("addons_directory", &self.addons_directory.to_string_lossy())?;
        validate_non_empty_string("metadata_extension", &self.metadata_extension)?;
        validate_url("catalog_url", &self.catalog_url)?;
        validate_non_empty_string("user_agent", &self.user_agent)?;
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn addons_directory(&self) -> &Path {
        &self.addons_directory
    }

    fn metadata_extension(&self) -> &str {
        &self.metadata_extension
    }

    fn catalog_url(&self) -> &str {
        &self.catalog_url
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn open_report(&self) -> bool {
        self.open_report
    }
}
