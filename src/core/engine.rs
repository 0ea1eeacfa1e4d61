use crate::core::report::partition;
use crate::core::Pipeline;
use crate::utils::error::Result;
use std::path::PathBuf;

pub struct CheckEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> CheckEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs scan, catalog lookups and reporting in order.
    ///
    /// Nothing is written unless every lookup succeeded.
    pub async fn run(&self) -> Result<PathBuf> {
        // Extract
        tracing::info!("Scanning addon directories...");
        let packages = self.pipeline.extract().await?;
        tracing::info!("Found {} addons", packages.len());

        // Transform
        tracing::info!("Checking catalog versions...");
        let checked = self.pipeline.transform(packages).await?;
        let summary = partition(checked);
        tracing::info!(
            "{} outdated, {} up to date, {} unknown",
            summary.outdated.len(),
            summary.up_to_date.len(),
            summary.unknown.len()
        );

        // Load
        let report_path = self.pipeline.load(summary).await?;
        tracing::info!("Report saved to: {}", report_path.display());

        Ok(report_path)
    }
}
