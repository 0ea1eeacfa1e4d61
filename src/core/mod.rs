pub mod catalog;
pub mod engine;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod scanner;

pub use crate::domain::model::{CheckedPackage, Package, ReportSummary};
pub use crate::domain::ports::{Catalog, ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
