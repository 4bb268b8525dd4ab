//! Configuration constants.
//!
//! Defaults used by the CLI and by `Config::default()`.

/// Default SQLite database file.
pub const DB_PATH: &str = "./milk_records.db";

/// Default address the web server binds to.
pub const DEFAULT_BIND: &str = "0.0.0.0";

/// Default web server port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default output path for the `export` subcommand.
pub const DEFAULT_EXPORT_PATH: &str = "milk-records.xlsx";

/// Environment variable overriding the database path.
pub const ENV_DB_PATH: &str = "MILK_LOG_DB_PATH";

/// Environment variable overriding the web server port.
pub const ENV_PORT: &str = "MILK_LOG_PORT";
