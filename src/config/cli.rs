use super::{JudgeKind, LogFormat};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "echo-drill")]
#[command(about = "Backend for a speech repetition game")]
pub struct CliConfig {
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, default_value = "8000")]
    pub port: u16,

    #[arg(long, default_value = "./static")]
    pub static_dir: PathBuf,

    #[arg(long, help = "Game TOML file overriding the built-in phrases and prompts")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "openai")]
    pub judge: JudgeKind,

    #[arg(long, help = "Chat model name (overrides the game file)")]
    pub model: Option<String>,

    #[arg(long, help = "Base URL of the chat completions API (overrides the game file)")]
    pub api_base: Option<String>,

    #[arg(long, value_enum, default_value = "compact")]
    pub log_format: LogFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
