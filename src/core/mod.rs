pub mod render;
pub mod vet_service;

pub use crate::domain::model::{Specialty, Vet, VetView};
pub use crate::domain::ports::{ConfigProvider, ReadTransaction, VetStore};
pub use crate::utils::error::Result;
