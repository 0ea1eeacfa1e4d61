pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig, Settings};
pub use core::{engine::CheckEngine, pipeline::AddonPipeline};
pub use utils::error::{Result, ScoutError};
