use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000002_create_student_table::Student;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(pk_auto(Course::Id))
                    .col(string(Course::StudentId))
                    .col(integer(Course::Position))
                    .col(string(Course::CourseName))
                    .col(integer(Course::Marks))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_student_id")
                            .from(Course::Table, Course::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_course_name_marks")
                    .table(Course::Table)
                    .col(Course::CourseName)
                    .col(Course::Marks)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Course {
    Table,
    Id,
    StudentId,
    Position,
    CourseName,
    Marks,
}
