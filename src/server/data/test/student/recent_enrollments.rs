use super::*;

/// Tests that only the five newest enrollments are returned, newest first.
///
/// Expected: five students ordered by enrollment date descending
#[tokio::test]
async fn returns_five_newest() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    for month in 1..=7 {
        StudentFactory::new(db, &department.id)
            .enrollment_date(date(2023, month, 1))
            .build()
            .await?;
    }

    let repo = StudentRepository::new(db);
    let rows = repo.find_recent_enrollments().await?;

    let months: Vec<NaiveDate> = rows.into_iter().map(|r| r.student.enrollment_date).collect();
    assert_eq!(
        months,
        vec![
            date(2023, 7, 1),
            date(2023, 6, 1),
            date(2023, 5, 1),
            date(2023, 4, 1),
            date(2023, 3, 1)
        ]
    );

    Ok(())
}

/// Tests the empty store.
///
/// Expected: Ok with no students
#[tokio::test]
async fn empty_store_has_no_recent_enrollments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);

    assert!(repo.find_recent_enrollments().await?.is_empty());

    Ok(())
}
