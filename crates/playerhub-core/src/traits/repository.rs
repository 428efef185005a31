//! Generic repository trait for database access.

use async_trait::async_trait;

use crate::result::AppResult;

/// Generic CRUD repository trait.
///
/// Each entity gets a strongly typed repository through the type
/// parameters: the stored entity, its identifier, the payload used to
/// create it and the payload used to update it. Entity-specific query
/// methods are defined on per-entity sub-traits.
#[async_trait]
pub trait Repository<Entity, Id, Create, Update>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
    Id: Send + Sync + Copy + 'static,
    Create: Send + Sync + 'static,
    Update: Send + Sync + 'static,
{
    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: Id) -> AppResult<Option<Entity>>;

    /// Return every entity, oldest first.
    async fn find_all(&self) -> AppResult<Vec<Entity>>;

    /// Create a new entity and return it.
    async fn create(&self, data: &Create) -> AppResult<Entity>;

    /// Apply changes to an existing entity and return the updated version.
    ///
    /// Returns `Ok(None)` when no entity has the given id.
    async fn update(&self, id: Id, changes: &Update) -> AppResult<Option<Entity>>;

    /// Delete an entity by its primary key. Returns `true` if deleted.
    async fn delete(&self, id: Id) -> AppResult<bool>;
}
