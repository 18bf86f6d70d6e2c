//! # Takt - Tracked Active Konsole Time
//!
//! A command-line utility for tracking active work time on a user/task
//! pair, detecting inactivity from global input events, capturing periodic
//! screenshots and submitting daily time records to a reporting server.
//!
//! ## Features
//!
//! - **Session Tracking**: start/pause/stop accounting with a 1-second tick
//! - **Inactivity Detection**: threshold-based idle spans folded into a
//!   separate inactive counter
//! - **Screenshot Capture**: randomized capture schedule, suppressed while
//!   idle
//! - **Daily Logs**: one JSON record per calendar day, accumulated across
//!   sessions
//! - **Record Upload**: fire-and-forget submission of daily aggregates
//!
//! ## Usage
//!
//! ```rust,no_run
//! use takt::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
