use super::*;

/// Tests finding a stored department by its id.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_department() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::department::DepartmentFactory::new(db)
        .name("Mathematics")
        .build()
        .await?;

    let repo = DepartmentRepository::new(db);
    let found = repo.find_by_id(&department.id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().name, "Mathematics");

    Ok(())
}

/// Tests that an unknown id yields no department.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DepartmentRepository::new(db);
    let found = repo.find_by_id("missing").await?;

    assert!(found.is_none());

    Ok(())
}
