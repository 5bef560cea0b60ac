pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{build_store, HttpVetStore, InMemoryVetStore, JsonFileVetStore, StoreKind};
pub use core::render::{render, OutputFormat};
pub use core::vet_service::VetService;
pub use domain::model::{project, Specialty, SpecialtyView, Vet, VetView, Vets};
pub use utils::error::{Result, VetError};
