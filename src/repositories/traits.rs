//! Common repository traits
//!
//! This module defines generic interfaces for database operations.

use crate::core::RepoError;

/// Trait for creating new entities in the database
///
/// # Type Parameters
/// * `Entity` - Type of the returned entity (with ID assigned by the database)
/// * `CreateDTO` - DTO for creation (without ID, will be automatically generated)
pub trait Create<Entity, CreateDTO> {
    /// Creates a new entity in the database
    ///
    /// # Arguments
    /// * `data` - DTO containing the data for creation (without ID)
    ///
    /// # Returns
    /// * `Ok(Entity)` - Created entity with ID assigned by the database
    /// * `Err(RepoError)` - Classified error, e.g. `Conflict` on a duplicate
    async fn create(&self, data: &CreateDTO) -> Result<Entity, RepoError>;
}

/// Trait for reading a single entity by primary key
///
/// # Type Parameters
/// * `Entity` - Type of the entity to read
/// * `Id` - Type of the primary key
pub trait Read<Entity, Id> {
    /// Reads an entity from the database by its primary key
    ///
    /// # Arguments
    /// * `id` - Primary key of the entity to read
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - Entity found
    /// * `Ok(None)` - No entity with that ID
    /// * `Err(RepoError)` - Error during reading
    async fn read(&self, id: &Id) -> Result<Option<Entity>, RepoError>;
}

/// Trait for reading a page of entities in stable order
///
/// # Type Parameters
/// * `Entity` - Type of the entities to read
pub trait List<Entity> {
    /// Reads up to `limit` entities starting at `offset`, ordered by
    /// ascending primary key so that paging is stable between calls.
    ///
    /// # Arguments
    /// * `limit` - Maximum number of rows to return; negative means no limit
    /// * `offset` - Number of rows to skip
    ///
    /// # Returns
    /// * `Ok(Vec<Entity>)` - The requested page (can be empty)
    /// * `Err(RepoError)` - Error during reading
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Entity>, RepoError>;
}

/// Trait for updating existing entities
///
/// # Type Parameters
/// * `Entity` - Type of the updated entity
/// * `UpdateDTO` - DTO carrying the full set of replacement values
/// * `Id` - Type of the primary key
pub trait Update<Entity, UpdateDTO, Id> {
    /// Replaces every mutable field of an existing entity
    ///
    /// # Arguments
    /// * `id` - Primary key of the entity to update
    /// * `data` - DTO containing the replacement values
    ///
    /// # Returns
    /// * `Ok(Entity)` - Updated entity
    /// * `Err(RepoError)` - `NotFound` when no row has that ID
    async fn update(&self, id: &Id, data: &UpdateDTO) -> Result<Entity, RepoError>;
}

/// Trait for deleting entities
///
/// # Type Parameters
/// * `Id` - Type of the primary key
pub trait Delete<Id> {
    /// Deletes an entity from the database
    ///
    /// # Arguments
    /// * `id` - Primary key of the entity to delete
    ///
    /// # Returns
    /// * `Ok(())` - Deletion successful
    /// * `Err(RepoError)` - `NotFound` when no row has that ID, `Conflict`
    ///   when other rows still reference it
    async fn delete(&self, id: &Id) -> Result<(), RepoError>;
}
