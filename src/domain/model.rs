use serde::{Deserialize, Serialize};

/// A named medical specialization a vet can hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
}

impl Specialty {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }
}

/// A clinic staff member as held by the store.
///
/// The identifier stays `None` until a store assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    specialties: Vec<Specialty>,
}

impl Vet {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            specialties: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_specialty(mut self, specialty: Specialty) -> Self {
        self.add_specialty(specialty);
        self
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn specialties(&self) -> &[Specialty] {
        &self.specialties
    }

    /// Specialties ordered by name, the way the clinic lists them.
    pub fn sorted_specialties(&self) -> Vec<&Specialty> {
        let mut sorted: Vec<&Specialty> = self.specialties.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }

    pub fn nr_of_specialties(&self) -> usize {
        self.specialties.len()
    }

    /// A specialty already held (same name) is ignored.
    pub fn add_specialty(&mut self, specialty: Specialty) {
        if self.specialties.iter().any(|s| s.name == specialty.name) {
            return;
        }
        self.specialties.push(specialty);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialtyView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
}

impl From<&Specialty> for SpecialtyView {
    fn from(specialty: &Specialty) -> Self {
        Self {
            id: specialty.id,
            name: specialty.name.clone(),
        }
    }
}

/// Presentation snapshot of a [`Vet`]. Owns all of its data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VetView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub specialties: Vec<SpecialtyView>,
}

impl VetView {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<&Vet> for VetView {
    fn from(vet: &Vet) -> Self {
        project(vet)
    }
}

/// Straight field-by-field copy, no normalization.
pub fn project(vet: &Vet) -> VetView {
    VetView {
        id: vet.id,
        first_name: vet.first_name.clone(),
        last_name: vet.last_name.clone(),
        specialties: vet.specialties.iter().map(SpecialtyView::from).collect(),
    }
}

/// The `{"vetList": [...]}` envelope used on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vets<T> {
    #[serde(rename = "vetList")]
    pub vet_list: Vec<T>,
}

impl<T> Vets<T> {
    pub fn new(vet_list: Vec<T>) -> Self {
        Self { vet_list }
    }
}

/// Stores accept either the envelope or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum VetPayload {
    Envelope(Vets<Vet>),
    List(Vec<Vet>),
}

impl VetPayload {
    pub(crate) fn into_vets(self) -> Vec<Vet> {
        match self {
            VetPayload::Envelope(vets) => vets.vet_list,
            VetPayload::List(list) => list,
        }
    }
}
