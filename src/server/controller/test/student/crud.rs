use super::*;

/// Tests the full lifecycle of a student over HTTP.
///
/// Creates, reads, replaces and deletes a student, checking the derived percentage at each
/// step and the not-found response after deletion.
///
/// Expected: 201, 200, 200, 204, then 404
#[tokio::test]
async fn student_lifecycle() {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::department::DepartmentFactory::new(db)
        .id("d1")
        .name("Computer Science")
        .build()
        .await
        .unwrap();
    let app = test_app(db);

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/v1/students",
        Some(student_json(
            "d1",
            "alice@x.com",
            json!([{ "name": "Algorithms", "marks": 85 }]),
        )),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["percentage"], 85.0);
    assert_eq!(created["department"]["name"], "Computer Science");
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());

    let (status, fetched) = get(&app, &format!("/api/v1/students/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/students/{}", id),
        Some(student_json(
            "d1",
            "alice@x.com",
            json!([
                { "name": "Algorithms", "marks": 95 },
                { "name": "Systems", "marks": 75 }
            ]),
        )),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id.as_str());

    let (_, fetched) = get(&app, &format!("/api/v1/students/{}", id)).await;
    assert_eq!(fetched["percentage"], 85.0);
    assert_eq!(fetched["courses"].as_array().unwrap().len(), 2);

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/students/{}", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = get(&app, &format!("/api/v1/students/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["message"],
        format!("Student not found with id : '{}'", id)
    );
}

/// Tests that the path id wins over a body id on update.
///
/// Expected: 200 with the path id
#[tokio::test]
async fn update_keeps_path_id() {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let department = factory::create_department(db).await.unwrap();
    let student = factory::create_student(db, &department.id).await.unwrap();
    let app = test_app(db);

    let mut payload = student_json(
        &department.id,
        &student.email,
        json!([{ "name": "Art", "marks": 70 }]),
    );
    payload["id"] = json!("someone-else");

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/students/{}", student.id),
        Some(payload),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], student.id.as_str());
    assert_eq!(body["percentage"], 70.0);
}

/// Tests the count and exists endpoints.
///
/// Expected: counts only active students, exists matches exact email
#[tokio::test]
async fn counts_and_checks_existence() {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let department = factory::create_department(db).await.unwrap();
    StudentFactory::new(db, &department.id)
        .email("on@x.com")
        .build()
        .await
        .unwrap();
    StudentFactory::new(db, &department.id)
        .active(false)
        .build()
        .await
        .unwrap();
    let app = test_app(db);

    let (status, body) = get(&app, "/api/v1/students/count-active").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "count": 1 }));

    let (_, body) = get(&app, "/api/v1/students/exists?email=on@x.com").await;
    assert_eq!(body, json!({ "exists": true }));

    let (_, body) = get(&app, "/api/v1/students/exists?email=off@x.com").await;
    assert_eq!(body, json!({ "exists": false }));
}
