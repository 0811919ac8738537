use super::*;

/// Tests paging through all students sorted by last name.
///
/// Expected: first page holds the first two names, total covers all rows
#[tokio::test]
async fn pages_all_students_sorted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    for last_name in ["Carter", "Adams", "Baker"] {
        StudentFactory::new(db, &department.id)
            .last_name(last_name)
            .build()
            .await?;
    }

    let repo = StudentRepository::new(db);
    let (first, total) = repo.find_all_paged(&page(1, 2, "lastName", "asc")).await?;
    let (second, _) = repo.find_all_paged(&page(2, 2, "lastName", "asc")).await?;

    assert_eq!(total, 3);
    let names: Vec<String> = first.into_iter().map(|r| r.student.last_name).collect();
    assert_eq!(names, vec!["Adams", "Baker"]);
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].student.last_name, "Carter");

    Ok(())
}

/// Tests that any direction other than `asc` sorts descending.
///
/// Expected: names in reverse order
#[tokio::test]
async fn unknown_direction_sorts_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    for last_name in ["Adams", "Baker"] {
        StudentFactory::new(db, &department.id)
            .last_name(last_name)
            .build()
            .await?;
    }

    let repo = StudentRepository::new(db);
    let (rows, _) = repo
        .find_all_paged(&page(1, 10, "lastName", "sideways"))
        .await?;

    let names: Vec<String> = rows.into_iter().map(|r| r.student.last_name).collect();
    assert_eq!(names, vec!["Baker", "Adams"]);

    Ok(())
}

/// Tests that an unknown sort key falls back to id order instead of failing.
///
/// Expected: Ok with rows ordered by id
#[tokio::test]
async fn ignores_unknown_sort_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    StudentFactory::new(db, &department.id).id("b").build().await?;
    StudentFactory::new(db, &department.id).id("a").build().await?;

    let repo = StudentRepository::new(db);
    let (rows, total) = repo
        .find_all_paged(&page(1, 10, "percentage", "desc"))
        .await?;

    assert_eq!(total, 2);
    assert_eq!(ids(&rows), vec!["a", "b"]);

    Ok(())
}

/// Tests that a page beyond the end is empty but still reports the total.
///
/// Expected: no rows, total unchanged
#[tokio::test]
async fn page_past_end_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    factory::create_student(db, &department.id).await?;

    let repo = StudentRepository::new(db);
    let (rows, total) = repo.find_all_paged(&page(5, 10, "lastName", "asc")).await?;

    assert!(rows.is_empty());
    assert_eq!(total, 1);

    Ok(())
}

/// Tests the active filter and count.
///
/// Expected: only active students returned and counted
#[tokio::test]
async fn filters_active_students() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let active = StudentFactory::new(db, &department.id).build().await?;
    StudentFactory::new(db, &department.id)
        .active(false)
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let (rows, total) = repo.find_active_paged(&page(1, 20, "lastName", "asc")).await?;

    assert_eq!(total, 1);
    assert_eq!(ids(&rows), vec![active.id]);
    assert_eq!(repo.count_active().await?, 1);

    Ok(())
}

/// Tests matching students by exact course name.
///
/// Expected: only students holding a course with that exact name
#[tokio::test]
async fn filters_by_course_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let math = StudentFactory::new(db, &department.id)
        .courses(vec![("Art", 50), ("Math", 70)])
        .build()
        .await?;
    StudentFactory::new(db, &department.id)
        .courses(vec![("math", 90)])
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let (rows, total) = repo
        .find_by_course_paged("Math", &page(1, 20, "lastName", "asc"))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(ids(&rows), vec![math.id]);
    assert_eq!(rows[0].courses.len(), 2);

    Ok(())
}

/// Tests that the course name and minimum score must hold on the same course.
///
/// Expected: a student scoring high only in another course is excluded
#[tokio::test]
async fn high_scorers_match_single_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let scorer = StudentFactory::new(db, &department.id)
        .courses(vec![("Math", 95), ("Art", 10)])
        .build()
        .await?;
    StudentFactory::new(db, &department.id)
        .courses(vec![("Math", 60), ("Art", 99)])
        .build()
        .await?;
    let exact = StudentFactory::new(db, &department.id)
        .courses(vec![("Math", 90)])
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let (rows, total) = repo
        .find_high_scorers_paged("Math", 90, &page(1, 20, "id", "asc"))
        .await?;

    assert_eq!(total, 2);
    let mut expected = vec![scorer.id, exact.id];
    expected.sort();
    assert_eq!(ids(&rows), expected);

    Ok(())
}

/// Tests filtering by department id.
///
/// Expected: only students of the requested department
#[tokio::test]
async fn filters_by_department() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let science = factory::create_department(db).await?;
    let arts = factory::create_department(db).await?;
    let member = factory::create_student(db, &science.id).await?;
    factory::create_student(db, &arts.id).await?;

    let repo = StudentRepository::new(db);
    let (rows, total) = repo
        .find_by_department_paged(&science.id, &page(1, 20, "lastName", "asc"))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(ids(&rows), vec![member.id]);

    Ok(())
}

/// Tests that birth date bounds are exclusive.
///
/// Expected: students born exactly on a bound are excluded
#[tokio::test]
async fn born_between_excludes_bounds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    for dob in [date(2000, 1, 1), date(2000, 6, 15), date(2000, 12, 31)] {
        StudentFactory::new(db, &department.id)
            .date_of_birth(dob)
            .build()
            .await?;
    }

    let repo = StudentRepository::new(db);
    let (rows, total) = repo
        .find_born_between_paged(date(2000, 1, 1), date(2000, 12, 31), &page(1, 20, "dob", "asc"))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(rows[0].student.date_of_birth, date(2000, 6, 15));

    Ok(())
}
