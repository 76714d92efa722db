use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// A delete was refused because other rows still reference the target.
    #[error("Cannot delete {entity}: dependent records exist")]
    DependentRecords { entity: &'static str },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
