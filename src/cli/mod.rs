//! # CLI Module
//!
//! The interactive client of the bridge service. It never talks to Spotify or
//! the chart site directly; every action goes through the HTTP service, and the
//! service session is kept alive by the cookie jar of [`BridgeClient`].
//!
//! ## Commands
//!
//! - [`authenticate`] - checks the login state and, if needed, opens the
//!   Spotify consent screen in a browser and polls until the login completes
//! - [`show_chart`] - prints a chart as a table
//! - [`create_playlist`] - builds a playlist and prints found/missing stats
//! - [`interactive`] - the menu loop combining the above
//!
//! ## Error Handling
//!
//! Failed requests are printed with the error macros and the client carries
//! on: the menu loop always returns to the menu. Only an unreachable service
//! at startup ends the program.
//!
//! ## Usage
//!
//! ```bash
//! chartbridge                     # interactive menu
//! chartbridge auth                # log in only
//! chartbridge create 2024-01-06   # playlist for a past week
//! chartbridge chart               # print the current chart
//! ```

mod auth;
mod chart;
mod client;
mod menu;
mod playlist;
mod prompt;

pub use auth::authenticate;
pub use chart::{chart_table, show_chart};
pub use client::BridgeClient;
pub use menu::interactive;
pub use playlist::create_playlist;
