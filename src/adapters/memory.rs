use crate::core::{ReadTransaction, Result, Specialty, Vet, VetStore};
use crate::utils::error::VetError;
use async_trait::async_trait;
use tokio::sync::{RwLock, RwLockReadGuard};

/// Vet store kept in process memory.
#[derive(Debug, Default)]
pub struct InMemoryVetStore {
    vets: RwLock<Vec<Vet>>,
}

impl InMemoryVetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with vets as given, ids untouched.
    pub fn with_vets(vets: Vec<Vet>) -> Self {
        Self {
            vets: RwLock::new(vets),
        }
    }

    /// The six vets the clinic ships with.
    pub fn with_sample_data() -> Self {
        let radiology = Specialty::new("radiology").with_id(1);
        let surgery = Specialty::new("surgery").with_id(2);
        let dentistry = Specialty::new("dentistry").with_id(3);

        Self::with_vets(vec![
            Vet::new("James", "Carter").with_id(1),
            Vet::new("Helen", "Leary")
                .with_id(2)
                .with_specialty(radiology.clone()),
            Vet::new("Linda", "Douglas")
                .with_id(3)
                .with_specialty(surgery.clone())
                .with_specialty(dentistry),
            Vet::new("Rafael", "Ortega")
                .with_id(4)
                .with_specialty(surgery),
            Vet::new("Henry", "Stevens")
                .with_id(5)
                .with_specialty(radiology),
            Vet::new("Sharon", "Jenkins").with_id(6),
        ])
    }

    /// Stores a vet, assigning the next free id when it has none.
    ///
    /// Ids stay unique: an id already held by another vet is rejected.
    pub async fn insert(&self, mut vet: Vet) -> Result<Vet> {
        let mut vets = self.vets.write().await;
        match vet.id {
            Some(id) => {
                if vets.iter().any(|v| v.id == Some(id)) {
                    return Err(VetError::store(format!("vet id {} is already taken", id)));
                }
            }
            None => {
                let highest = vets.iter().filter_map(|v| v.id).max().unwrap_or(0);
                let next_id = highest
                    .checked_add(1)
                    .ok_or_else(|| VetError::store("no vet ids left to assign"))?;
                vet.id = Some(next_id);
            }
        }
        tracing::debug!("Stored vet {:?}: {} {}", vet.id, vet.first_name, vet.last_name);
        vets.push(vet.clone());
        Ok(vet)
    }

    pub async fn len(&self) -> usize {
        self.vets.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.vets.read().await.is_empty()
    }
}

/// Holds the read lock until the transaction ends.
struct MemoryReadTx<'a> {
    guard: RwLockReadGuard<'a, Vec<Vet>>,
}

#[async_trait]
impl ReadTransaction for MemoryReadTx<'_> {
    async fn fetch_all(&mut self) -> Result<Vec<Vet>> {
        Ok(self.guard.to_vec())
    }

    async fn commit(self: Box<Self>) -> Result<()> {
        Ok(())
    }

    async fn rollback(self: Box<Self>) {}
}

#[async_trait]
impl VetStore for InMemoryVetStore {
    async fn begin_read_only(&self) -> Result<Box<dyn ReadTransaction + '_>> {
        let guard = self.vets.read().await;
        Ok(Box::new(MemoryReadTx { guard }))
    }
}
