#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::adapters::StoreKind;
use crate::core::render::OutputFormat;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation;

/// 共用的配置檢查：store 類型、對應欄位、輸出格式
pub(crate) fn validate_provider<C: ConfigProvider>(config: &C) -> Result<()> {
    let kind: StoreKind = config.store_kind().parse()?;
    match kind {
        StoreKind::Memory => {}
        StoreKind::File => {
            let path = validation::present("store.path", config.data_file())?;
            validation::data_file("store.path", path)?;
        }
        StoreKind::Http => {
            let endpoint = validation::present("store.endpoint", config.endpoint())?;
            validation::store_endpoint("store.endpoint", endpoint)?;
        }
    }

    validation::timeout_seconds("store.timeout_seconds", config.timeout_seconds())?;
    config.output_format().parse::<OutputFormat>()?;
    Ok(())
}
