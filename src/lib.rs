pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::db_config::DbConfig;
pub use crate::core::reset::ResetEngine;
pub use crate::db::ConnectionManager;
pub use crate::domain::ports::DocumentStore;
pub use crate::utils::error::{DbError, Result};
