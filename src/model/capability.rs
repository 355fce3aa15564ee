use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind, Id, Identified};

/// Manufacturing capability (process line and its equipment)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capability {
    #[serde(rename = "Id", default)]
    pub id: Id,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub capacity: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub equipment: Option<Vec<String>>,
    pub capacity: Option<String>,
}

impl Identified for Capability {
    const KIND: EntityKind = EntityKind::Capability;

    fn id(&self) -> Id {
        self.id
    }
}

impl Entity for Capability {
    type Patch = CapabilityPatch;

    fn set_id(&mut self, id: Id) {
        self.id = id;
    }

    fn apply(&mut self, patch: CapabilityPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(equipment) = patch.equipment {
            self.equipment = equipment;
        }
        if let Some(capacity) = patch.capacity {
            self.capacity = capacity;
        }
    }
}
