use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_department_table::Department;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(string(Student::Id).primary_key())
                    .col(string(Student::FirstName))
                    .col(string(Student::LastName))
                    .col(string_uniq(Student::Email))
                    .col(date(Student::DateOfBirth))
                    .col(string(Student::DepartmentId))
                    .col(date(Student::EnrollmentDate))
                    .col(boolean(Student::IsActive))
                    .col(string(Student::FirstNameLower))
                    .col(string(Student::LastNameLower))
                    .col(string(Student::SearchTerms))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_department_id")
                            .from(Student::Table, Student::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Department listings are usually filtered by active flag as well
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_department_active")
                    .table(Student::Table)
                    .col(Student::DepartmentId)
                    .col(Student::IsActive)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_enrollment_date")
                    .table(Student::Table)
                    .col(Student::EnrollmentDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    DateOfBirth,
    DepartmentId,
    EnrollmentDate,
    IsActive,
    FirstNameLower,
    LastNameLower,
    SearchTerms,
}
