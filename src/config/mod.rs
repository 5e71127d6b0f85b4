pub mod db_config;

pub use db_config::DbConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "queuectl-db")]
#[command(about = "Connection check for the queuectl MongoDB database")]
pub struct CliConfig {
    /// MongoDB connection string (overrides MONGO_URI and the config file)
    #[arg(long)]
    pub uri: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, default_value = "queuectl.toml")]
    pub config: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
