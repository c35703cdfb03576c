//! Chart Bridge Library
//!
//! This library turns the weekly Billboard Hot 100 into a Spotify playlist. It
//! scrapes the chart page, matches every entry against the Spotify catalog and
//! assembles the matches into a playlist on behalf of an OAuth-authenticated
//! user. The same building blocks back the HTTP service (`chartbridge-server`)
//! and the interactive command-line client (`chartbridge`).
//!
//! # Modules
//!
//! - `api` - HTTP request handlers of the bridge service
//! - `chart` - Chart page fetching and HTML parsing
//! - `cli` - Interactive command-line client talking to the service
//! - `config` - Configuration management and environment variables
//! - `management` - Per-caller session records
//! - `server` - Router assembly and HTTP listener
//! - `spotify` - Spotify Web API session (auth, search, playlists)
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use chartbridge::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> chartbridge::Res<()> {
//!     config::load_env();
//!     server::start_api_server(config::Settings::from_env()).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chart;
pub mod cli;
pub mod config;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the binaries and the CLI layer, where any error simply ends up
/// printed to the console. The library layers below return typed errors
/// (`ChartError`, `CatalogError`, `ApiError`) instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching chart for {}", date);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Playlist {} created", name);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red cross.
///
/// The client keeps running after an error; interactive loops return to the
/// menu. Use [`fatal!`] when the program cannot continue.
///
/// # Example
///
/// ```
/// error!("Invalid date format. Please use YYYY-MM-DD");
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "x".red().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for unrecoverable conditions such as an unreachable service at
/// startup. Code after this macro does not run.
///
/// # Example
///
/// ```
/// fatal!("Bridge service is not running at {}", url);
/// ```
#[macro_export]
macro_rules! fatal {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Failed to open browser, open {} manually", url);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
