use komplex_core::enums::EntityType;
use komplex_core::errors::CoreError;

/// Turn a missing entity into a `NotFound` error for the command line.
pub fn require<T>(found: Option<T>, entity: EntityType, id: &str) -> anyhow::Result<T> {
    found.ok_or_else(|| {
        CoreError::NotFound {
            entity_type: entity.to_string(),
            id: id.to_string(),
        }
        .into()
    })
}
