//! Project entity model, draft DTO, and required-field validation.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// A portfolio project as returned by the server.
///
/// `id` is assigned by the server on create and is the sole identity of
/// an entry in the local collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    /// URL of the showcase image.
    pub image: String,
    pub category: String,
    pub year: String,
    pub client: String,
}

/// DTO for a project being created or edited. Carries no `id`; the
/// server assigns one on create.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub year: String,
    pub client: String,
}

impl ProjectDraft {
    /// A blank draft with `year` seeded to the current calendar year.
    pub fn seeded() -> Self {
        Self {
            year: chrono::Utc::now().format("%Y").to_string(),
            ..Self::default()
        }
    }

    /// Check the required fields (`title`, `description`, `image`).
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_required(&self.title, &self.description, &self.image)
    }
}

impl Project {
    /// Check the required fields of an editing draft (which carries an id).
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_required(&self.title, &self.description, &self.image)
    }
}

/// `title`, `description` and `image` must all be non-empty.
fn validate_required(title: &str, description: &str, image: &str) -> Result<(), CoreError> {
    if title.is_empty() || description.is_empty() || image.is_empty() {
        Err(CoreError::Validation(
            "title, description and image are required".to_string(),
        ))
    } else {
        Ok(())
    }
}
