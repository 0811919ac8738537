use super::*;

/// Tests case-insensitive substring matching on first and last names.
///
/// Expected: matches on either name, ordered by last then first name
#[tokio::test]
async fn matches_first_or_last_name_ignoring_case() -> Result<(), DbErr> {
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
        .build()
        .await?;
    StudentFactory::new(db, &department.id)
        .first_name("Bob")
        .last_name("Malice")
        .build()
        .await?;
    StudentFactory::new(db, &department.id)
        .first_name("Carol")
        .last_name("Jones")
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let rows = repo.search_by_name("ALIC").await?;

    let names: Vec<String> = rows.into_iter().map(|r| r.student.last_name).collect();
    assert_eq!(names, vec!["Malice", "Smith"]);

    Ok(())
}

/// Tests that wildcard characters in the term are matched literally.
///
/// Expected: `%` matches nothing when no name contains it
#[tokio::test]
async fn treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    factory::create_student(db, &department.id).await?;

    let repo = StudentRepository::new(db);

    assert!(repo.search_by_name("%").await?.is_empty());
    assert!(repo.search_by_name("_").await?.is_empty());
    assert_eq!(repo.search_by_name("ada").await?.len(), 1);

    Ok(())
}

/// Tests case-insensitive matching on names outside of ASCII.
///
/// Expected: any casing of an accented name finds the student, including after a rename
#[tokio::test]
async fn matches_non_ascii_names_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let repo = StudentRepository::new(db);

    let mut params = student_params(&department.id, "emile.zola@example.fr");
    params.first_name = "Émile".to_string();
    params.last_name = "Zola".to_string();
    let created = repo.create(params).await?;

    for term in ["Émile", "émile", "ÉMILE", "mil"] {
        let rows = repo.search_by_name(term).await?;
        assert_eq!(rows.len(), 1, "term {:?}", term);
        assert_eq!(rows[0].student.first_name, "Émile");
    }

    let mut renamed = student_params(&department.id, "emile.zola@example.fr");
    renamed.first_name = "Ørjan".to_string();
    renamed.last_name = "Ångström".to_string();
    repo.update(&created.student.id, renamed).await?;

    assert!(repo.search_by_name("émile").await?.is_empty());
    assert_eq!(repo.search_by_name("ØRJAN").await?.len(), 1);
    assert_eq!(repo.search_by_name("ångSTRÖM").await?.len(), 1);

    Ok(())
}
