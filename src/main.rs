use anyhow::Context;
use clap::Parser;
use vet_lookup::core::ConfigProvider;
use vet_lookup::utils::error::VetError;
use vet_lookup::utils::{logger, validation::Validate};
use vet_lookup::{build_store, render, CliConfig, OutputFormat, TomlConfig, VetService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let toml = match &cli.config {
        Some(path) => Some(
            TomlConfig::from_file(path)
                .with_context(|| format!("failed to load {}", path.display()))?,
        ),
        None => None,
    };

    let verbose = cli.verbose || toml.as_ref().is_some_and(|t| t.verbose());
    let json_logs = cli.json_logs || toml.as_ref().is_some_and(|t| t.json_logs());
    if json_logs {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting list-vets");
    tracing::debug!("CLI config: {:?}", cli);

    let exit_code = match &toml {
        Some(config) => run(config).await,
        None => run(&cli).await,
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

async fn run<C: ConfigProvider + Validate>(config: &C) -> i32 {
    match list_vets(config).await {
        Ok(output) => {
            print!("{}", output);
            0
        }
        Err(e) => {
            tracing::error!("❌ Listing vets failed: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            if e.is_upstream() {
                2
            } else {
                1
            }
        }
    }
}

async fn list_vets<C: ConfigProvider + Validate>(config: &C) -> Result<String, VetError> {
    config.validate()?;
    let format: OutputFormat = config.output_format().parse()?;

    let service = VetService::new(build_store(config)?);
    let views = service.list_all().await?;
    tracing::info!("✅ Loaded {} vets", views.len());

    render(&views, format)
}
