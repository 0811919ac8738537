use super::*;

/// Tests the page envelope arithmetic on a real listing.
///
/// Expected: second page of three with navigation flags set
#[tokio::test]
async fn pages_all_students() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    for last_name in ["A", "B", "C", "D", "E"] {
        StudentFactory::new(db, &department.id)
            .last_name(last_name)
            .build()
            .await?;
    }

    let service = StudentService::new(db);
    let page = service
        .get_all(page_params(2, 2, None, "asc"))
        .await?
        .into_dto();

    assert_eq!(page.page_number, 2);
    assert_eq!(page.total_elements, 5);
    assert_eq!(page.total_pages, 3);
    assert!(!page.first);
    assert!(!page.last);
    assert!(page.has_next);
    assert!(page.has_previous);
    let names: Vec<String> = page
        .content
        .into_iter()
        .filter_map(|s| s.last_name)
        .collect();
    assert_eq!(names, vec!["C", "D"]);

    Ok(())
}

/// Tests rejecting invalid page parameters.
///
/// Expected: Err(Validation) on the page field
#[tokio::test]
async fn rejects_page_zero() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StudentService::new(db);
    let result = service.get_active(page_params(0, 20, None, "asc")).await;

    match result {
        Err(AppError::Validation(errors)) => assert_eq!(errors[0].field, "page"),
        other => panic!("expected validation error, got {:?}", other.map(|p| p.content.len())),
    }

    Ok(())
}

/// Tests that a page number whose row offset overflows is rejected before querying.
///
/// Expected: Err(Validation) on the page field
#[tokio::test]
async fn rejects_page_beyond_offset_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StudentService::new(db);
    let result = service.get_all(page_params(i64::MAX, 1000, None, "asc")).await;

    match result {
        Err(AppError::Validation(errors)) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "page");
        }
        other => panic!("expected validation error, got {:?}", other.map(|p| p.content.len())),
    }

    Ok(())
}

/// Tests that the last reachable page number still queries normally.
///
/// Expected: Ok with an empty page
#[tokio::test]
async fn serves_largest_valid_page() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StudentService::new(db);
    let page = service.get_all(page_params(i64::MAX, 1, None, "asc")).await?;

    assert!(page.content.is_empty());
    assert_eq!(page.total_elements, 0);

    Ok(())
}

/// Tests that the born-between listing sorts by birth date by default.
///
/// Expected: youngest last, bounds excluded
#[tokio::test]
async fn born_between_defaults_to_dob_sort() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    for (last_name, dob) in [
        ("Young", date(2003, 3, 3)),
        ("Old", date(1999, 9, 9)),
        ("Middle", date(2001, 1, 1)),
    ] {
        StudentFactory::new(db, &department.id)
            .last_name(last_name)
            .date_of_birth(dob)
            .build()
            .await?;
    }

    let service = StudentService::new(db);
    let page = service
        .get_born_between(date(1990, 1, 1), date(2003, 3, 3), PageParams::default())
        .await?;

    let names: Vec<String> = page.content.into_iter().map(|s| s.last_name).collect();
    assert_eq!(names, vec!["Old", "Middle"]);

    Ok(())
}

/// Tests the course, high scorer and department listings together.
///
/// Expected: each listing applies its own filter
#[tokio::test]
async fn applies_listing_filters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let science = factory::create_department(db).await?;
    let arts = factory::create_department(db).await?;
    let strong = StudentFactory::new(db, &science.id)
        .courses(vec![("Math", 95)])
        .build()
        .await?;
    let weak = StudentFactory::new(db, &arts.id)
        .courses(vec![("Math", 60)])
        .active(false)
        .build()
        .await?;

    let service = StudentService::new(db);

    let by_course = service
        .get_by_course("Math", PageParams::default())
        .await?;
    assert_eq!(by_course.total_elements, 2);

    let high = service
        .get_high_scorers("Math", 90, PageParams::default())
        .await?;
    let high_ids: Vec<String> = high.content.into_iter().map(|s| s.id).collect();
    assert_eq!(high_ids, vec![strong.id.clone()]);

    let arts_page = service
        .get_by_department(&arts.id, PageParams::default())
        .await?;
    let arts_ids: Vec<String> = arts_page.content.into_iter().map(|s| s.id).collect();
    assert_eq!(arts_ids, vec![weak.id]);

    let unknown = service
        .get_by_department("nope", PageParams::default())
        .await?;
    assert!(unknown.content.is_empty());

    let active = service.get_active(PageParams::default()).await?;
    assert_eq!(active.total_elements, 1);
    assert_eq!(service.count_active().await?, 1);

    Ok(())
}

/// Tests name search, text search and recent enrollments.
///
/// Expected: search results and the recent list come back in their documented order
#[tokio::test]
async fn searches_students() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    StudentFactory::new(db, &department.id)
        .first_name("Alice")
        .last_name("Smith")
        .email("alice@x.com")
        .enrollment_date(date(2022, 9, 1))
        .build()
        .await?;
    StudentFactory::new(db, &department.id)
        .first_name("Bob")
        .last_name("Jones")
        .email("bob@y.org")
        .enrollment_date(date(2023, 9, 1))
        .build()
        .await?;

    let service = StudentService::new(db);

    let by_name = service.search_by_name("aLi").await?;
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].first_name, "Alice");

    let by_text = service
        .text_search("jones", PageParams::default())
        .await?;
    assert_eq!(by_text.total_elements, 1);
    assert_eq!(by_text.content[0].first_name, "Bob");

    let recent = service.get_recent_enrollments().await?;
    let names: Vec<String> = recent.into_iter().map(|s| s.first_name).collect();
    assert_eq!(names, vec!["Bob", "Alice"]);

    Ok(())
}

/// Tests both name searches on an accented name created through the service.
///
/// Expected: substring and whole-word searches find the student in any casing
#[tokio::test]
async fn searches_accented_names() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let service = StudentService::new(db);

    let mut dto = student_dto(&department.id, "emile@example.fr");
    dto.first_name = Some("Émile".to_string());
    let created = service.create(dto).await?;

    let by_name = service.search_by_name("ÉMILE").await?;
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].id, created.id);

    let by_text = service
        .text_search("émile", page_params(1, 20, None, "asc"))
        .await?;
    assert_eq!(by_text.total_elements, 1);
    assert_eq!(by_text.content[0].id, created.id);

    Ok(())
}
