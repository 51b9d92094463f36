use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored address-book entry.
///
/// Serializes as `{"id": "...", "name": "...", "number": "...", "email": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub number: String,
    pub email: String,
}

/// Client-supplied contact fields.
///
/// Absent fields decode as empty strings and unknown keys (including `id`)
/// are ignored, so a body can never choose its own identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactDraft {
    pub name: String,
    pub number: String,
    pub email: String,
}

impl ContactDraft {
    pub fn new(
        name: impl Into<String>,
        number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
            email: email.into(),
        }
    }

    /// Bind the draft to an identifier.
    pub fn into_contact(self, id: Uuid) -> Contact {
        Contact {
            id,
            name: self.name,
            number: self.number,
            email: self.email,
        }
    }
}
