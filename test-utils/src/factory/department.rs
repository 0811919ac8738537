//! Department factory for creating test department rows.

use crate::{factory::helpers::next_id, fixture};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test departments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let department = DepartmentFactory::new(&db).name("Physics").build().await?;
/// ```
pub struct DepartmentFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::department::Model,
}

impl<'a> DepartmentFactory<'a> {
    /// Creates a new factory with fixture defaults and a unique ID (`"dept-{n}"`).
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::department::entity_builder()
            .id(format!("dept-{}", id))
            .name(format!("Department {}", id))
            .build();

        Self { db, entity }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.entity.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.entity.location = location.into();
        self
    }

    pub fn established_on(mut self, established_on: NaiveDate) -> Self {
        self.entity.established_on = established_on;
        self
    }

    /// Builds and inserts the department into the database.
    ///
    /// # Returns
    /// - `Ok(entity::department::Model)` - Created department entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::department::Model, DbErr> {
        entity::department::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            name: ActiveValue::Set(self.entity.name),
            location: ActiveValue::Set(self.entity.location),
            established_on: ActiveValue::Set(self.entity.established_on),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a department with default values.
///
/// Shorthand for `DepartmentFactory::new(db).build().await`.
pub async fn create_department(
    db: &DatabaseConnection,
) -> Result<entity::department::Model, DbErr> {
    DepartmentFactory::new(db).build().await
}
