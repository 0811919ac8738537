//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a department and one student enrolled in it, both with default values.
///
/// # Returns
/// - `Ok((department, student))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_student_with_department(
    db: &DatabaseConnection,
) -> Result<(entity::department::Model, entity::student::Model), DbErr> {
    let department = crate::factory::department::create_department(db).await?;
    let student = crate::factory::student::create_student(db, &department.id).await?;

    Ok((department, student))
}
