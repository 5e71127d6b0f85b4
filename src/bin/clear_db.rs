use clap::Parser;
use queuectl_db::domain::model::managed_collections;
use queuectl_db::utils::error::{ConnectFailureKind, DbError};
use queuectl_db::utils::{logger, validation::Validate};
use queuectl_db::{ConnectionManager, DbConfig, ResetEngine};

#[derive(Debug, Parser)]
#[command(name = "clear-db")]
#[command(about = "Delete all documents from the queuectl jobs and configs collections")]
struct Args {
    /// MongoDB connection string (overrides MONGO_URI and the config file)
    #[arg(long)]
    uri: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, default_value = "queuectl.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - report document counts without deleting anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    let config = match DbConfig::load(&args.config, args.uri.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
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

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No documents will be deleted");
    }

    println!("Connecting to database...");

    let mut manager = ConnectionManager::new(config);
    if let Err(e) = manager.connect().await {
        report_connect_failure(&e, &manager);
        std::process::exit(1);
    }

    // The engine disconnects on every path once it has the manager.
    let collections = managed_collections();
    let mut engine = ResetEngine::with_dry_run(manager, args.dry_run);

    if let Err(e) = engine.run(&collections).await {
        tracing::error!(
            "❌ Database clear failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("Error clearing database: {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

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
