use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};

use crate::server::model::department::CreateDepartmentParams;

pub struct DepartmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepartmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a department by its id.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<entity::department::Model>, DbErr> {
        entity::prelude::Department::find_by_id(id).one(self.db).await
    }

    /// Counts all stored departments.
    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::Department::find().count(self.db).await
    }

    /// Inserts the given departments in one statement and returns how many were written.
    pub async fn save_all(&self, params: Vec<CreateDepartmentParams>) -> Result<u64, DbErr> {
        if params.is_empty() {
            return Ok(0);
        }

        let count = params.len() as u64;
        let models = params
            .into_iter()
            .map(|p| entity::department::ActiveModel {
                id: ActiveValue::Set(p.id),
                name: ActiveValue::Set(p.name),
                location: ActiveValue::Set(p.location),
                established_on: ActiveValue::Set(p.established_on),
            });

        entity::prelude::Department::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(count)
    }
}
