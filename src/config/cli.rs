use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "list-vets")]
#[command(about = "List the clinic's veterinarians and their specialties")]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file; replaces the store and output flags")]
    pub config: Option<PathBuf>,

    #[arg(long = "store", default_value = "memory", help = "memory, file or http")]
    pub store: String,

    #[arg(long)]
    pub data_file: Option<String>,

    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long, default_value = "10")]
    pub timeout_seconds: u64,

    #[arg(long, default_value = "table", help = "json, csv or table")]
    pub format: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn store_kind(&self) -> &str {
        &self.store
    }

    fn data_file(&self) -> Option<&str> {
        self.data_file.as_deref()
    }

    fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn headers(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    fn output_format(&self) -> &str {
        &self.format
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        super::validate_provider(self)
    }
}
