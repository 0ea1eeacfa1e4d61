use addon_scout::utils::{logger, validation::Validate};
use addon_scout::{AddonPipeline, CheckEngine, CliConfig, LocalStorage, ScoutError, Settings};
use clap::Parser;

async fn run(settings: Settings) -> addon_scout::Result<()> {
    settings.validate()?;

    println!("Dir: {}", settings.addons_directory.display());

    let storage = LocalStorage::current_dir();
    let pipeline = AddonPipeline::new(storage, settings)?;
    let engine = CheckEngine::new(pipeline);

    let report_path = engine.run().await?;
    println!("📁 Report saved to: {}", report_path.display());
    Ok(())
}

fn report_failure(e: &ScoutError) -> ! {
    tracing::error!(
        "❌ Addon check failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => report_failure(&e),
    };

    if let Err(e) = run(settings).await {
        report_failure(&e);
    }
}
