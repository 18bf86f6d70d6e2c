pub mod init;
pub mod logs;
pub mod track;
pub mod upload;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Run an interactive tracking session")]
    Track,
    #[command(about = "Upload a persisted daily record to the reporting server")]
    Upload(upload::UploadArgs),
    #[command(about = "Display persisted daily logs")]
    Logs,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        init_tracing();
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Track => track::cmd().await,
            Commands::Upload(args) => upload::cmd(args).await,
            Commands::Logs => logs::cmd(),
        }
    }
}

/// Installs the tracing subscriber when debug mode is active. Outside debug
/// mode the message macros print straight to the console and no subscriber
/// is needed.
fn init_tracing() {
    if crate::libs::messages::macros::is_debug_mode() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}
