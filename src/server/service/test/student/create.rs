use super::*;

/// Tests creating a student from a valid payload.
///
/// Verifies the id is generated, the percentage is derived from the marks and the
/// department is resolved from storage rather than taken from the payload.
///
/// Expected: Ok with a fully populated student
#[tokio::test]
async fn creates_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::department::DepartmentFactory::new(db)
        .name("Computer Science")
        .build()
        .await?;

    let mut dto = student_dto(&department.id, "alice@x.com");
    dto.id = Some("client-chosen".to_string());
    dto.percentage = Some(1.0);
    dto.department.as_mut().unwrap().name = Some("Spoofed".to_string());

    let service = StudentService::new(db);
    let student = service.create(dto).await?;

    assert_ne!(student.id, "client-chosen");
    assert_eq!(student.percentage(), 88.5);
    assert_eq!(
        student.department.map(|d| d.name),
        Some("Computer Science".to_string())
    );

    Ok(())
}

/// Tests that a payload referencing a missing department is rejected.
///
/// Expected: Err(NotFound) naming the department id and nothing stored
#[tokio::test]
async fn rejects_unknown_department() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StudentService::new(db);
    let err = service
        .create(student_dto("nope", "alice@x.com"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Department not found with id : 'nope'");
    assert_eq!(service.count_active().await?, 0);

    Ok(())
}

/// Tests that an invalid payload is rejected before touching storage.
///
/// Expected: Err(Validation) listing the failed marks field
#[tokio::test]
async fn rejects_invalid_payload() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let mut dto = student_dto(&department.id, "alice@x.com");
    dto.courses = Some(vec![course("Math", 101)]);

    let service = StudentService::new(db);
    let err = service.create(dto).await.unwrap_err();

    match err {
        AppError::Validation(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "courses[0].marks");
            assert_eq!(errors[0].message, "Marks cannot exceed 100");
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    Ok(())
}

/// Tests that a duplicate email is reported as a conflict.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn reports_duplicate_email_as_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let service = StudentService::new(db);
    service
        .create(student_dto(&department.id, "alice@x.com"))
        .await?;

    let err = service
        .create(student_dto(&department.id, "alice@x.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
    assert!(service.exists_by_email("alice@x.com").await?);

    Ok(())
}
