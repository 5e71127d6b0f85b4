use clap::Parser;
use queuectl_db::utils::error::{ConnectFailureKind, DbError};
use queuectl_db::utils::{logger, validation::Validate};
use queuectl_db::{CliConfig, ConnectionManager, DbConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting queuectl-db connection check");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match DbConfig::load(&cli.config, cli.uri.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", cli.config, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    println!("Connecting to database...");
    tracing::debug!("Target: {}", config.masked_uri());

    let mut manager = ConnectionManager::new(config);
    if let Err(e) = manager.connect().await {
        report_connect_failure(&e, &manager);
        std::process::exit(1);
    }

    println!("📡 Target: {}", manager.config().masked_uri());
    println!("🗄️ Database: {}", manager.config().database_name());

    manager.disconnect().await;
    Ok(())
}

fn report_connect_failure(err: &DbError, manager: &ConnectionManager) {
    let config = manager.config();
    let kind = ConnectFailureKind::classify(err, &config.uri);

    tracing::error!(
        "❌ Failed to connect to MongoDB: {} (Category: {:?}, Severity: {:?})",
        err,
        err.category(),
        err.severity()
    );

    eprintln!("❌ Failed to connect to MongoDB");
    eprintln!("{}", kind.remediation(&config.masked_uri()));
}
