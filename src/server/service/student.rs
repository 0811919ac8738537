use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::{
    model::student::StudentDto,
    server::{
        data::{department::DepartmentRepository, student::StudentRepository},
        error::AppError,
        model::{
            page::{Page, PageParams, PageRequest, DEFAULT_SORT_FIELD},
            student::{Student, StudentParams, StudentWithRelations},
        },
    },
};

/// Default sort field for the born-between listing.
pub const BORN_BETWEEN_SORT_FIELD: &str = "dob";

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and stores a new student.
    ///
    /// # Arguments
    /// - `dto` - Student payload; `id` and `percentage` are ignored
    ///
    /// # Returns
    /// - `Ok(Student)` - The stored student with a generated id
    /// - `Err(AppError::Validation)` - Payload failed one or more field constraints
    /// - `Err(AppError::NotFound)` - Referenced department does not exist
    /// - `Err(AppError::Conflict)` - Email already belongs to another student
    pub async fn create(&self, dto: StudentDto) -> Result<Student, AppError> {
        tracing::info!("Creating student with email {:?}", dto.email);

        let params = StudentParams::from_dto(dto, today())?;
        self.ensure_department_exists(&params.department_id).await?;

        let email = params.email.clone();
        let record = StudentRepository::new(self.db)
            .create(params)
            .await
            .map_err(|err| conflict_on_duplicate_email(err, &email))?;

        let student = Student::from_entity(record);
        tracing::info!("Created student {}", student.id);

        Ok(student)
    }

    /// Gets a student by id.
    ///
    /// # Returns
    /// - `Ok(Student)` - The student with its current department
    /// - `Err(AppError::NotFound)` - No student with that id
    pub async fn get_by_id(&self, id: &str) -> Result<Student, AppError> {
        tracing::info!("Fetching student {}", id);

        let record = StudentRepository::new(self.db).get_by_id(id).await?;

        match record {
            Some(record) => Ok(Student::from_entity(record)),
            None => {
                tracing::warn!("Student {} not found", id);
                Err(AppError::not_found("Student", "id", id))
            }
        }
    }

    /// Replaces every stored field of an existing student, including its course list.
    ///
    /// The department is re-resolved so a renamed or moved department is reflected in the
    /// response.
    ///
    /// # Returns
    /// - `Ok(Student)` - The updated student, id unchanged
    /// - `Err(AppError::NotFound)` - Student or referenced department does not exist
    /// - `Err(AppError::Validation)` - Payload failed one or more field constraints
    /// - `Err(AppError::Conflict)` - New email already belongs to another student
    pub async fn update(&self, id: &str, dto: StudentDto) -> Result<Student, AppError> {
        tracing::info!("Updating student {}", id);

        let params = StudentParams::from_dto(dto, today())?;

        let repo = StudentRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            tracing::warn!("Student {} not found for update", id);
            return Err(AppError::not_found("Student", "id", id));
        }

        self.ensure_department_exists(&params.department_id).await?;

        let email = params.email.clone();
        let record = repo
            .update(id, params)
            .await
            .map_err(|err| conflict_on_duplicate_email(err, &email))?
            .ok_or_else(|| AppError::not_found("Student", "id", id))?;

        tracing::info!("Updated student {}", id);

        Ok(Student::from_entity(record))
    }

    /// Deletes a student and its courses.
    ///
    /// # Returns
    /// - `Ok(())` - The student was removed
    /// - `Err(AppError::NotFound)` - No student with that id
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        tracing::info!("Deleting student {}", id);

        if !StudentRepository::new(self.db).delete(id).await? {
            tracing::warn!("Student {} not found for deletion", id);
            return Err(AppError::not_found("Student", "id", id));
        }

        tracing::info!("Deleted student {}", id);

        Ok(())
    }

    pub async fn get_all(&self, params: PageParams) -> Result<Page<Student>, AppError> {
        let request = params.into_request(DEFAULT_SORT_FIELD)?;
        let result = StudentRepository::new(self.db)
            .find_all_paged(&request)
            .await;

        to_page("all students", result, &request)
    }

    pub async fn get_active(&self, params: PageParams) -> Result<Page<Student>, AppError> {
        let request = params.into_request(DEFAULT_SORT_FIELD)?;
        let result = StudentRepository::new(self.db)
            .find_active_paged(&request)
            .await;

        to_page("active students", result, &request)
    }

    /// Lists students enrolled in a course with exactly this name.
    pub async fn get_by_course(
        &self,
        course_name: &str,
        params: PageParams,
    ) -> Result<Page<Student>, AppError> {
        let request = params.into_request(DEFAULT_SORT_FIELD)?;
        let result = StudentRepository::new(self.db)
            .find_by_course_paged(course_name, &request)
            .await;

        to_page("students by course", result, &request)
    }

    /// Lists students with at least `min_score` in the course named `course_name`.
    pub async fn get_high_scorers(
        &self,
        course_name: &str,
        min_score: i32,
        params: PageParams,
    ) -> Result<Page<Student>, AppError> {
        let request = params.into_request(DEFAULT_SORT_FIELD)?;
        let result = StudentRepository::new(self.db)
            .find_high_scorers_paged(course_name, min_score, &request)
            .await;

        to_page("high scorers", result, &request)
    }

    /// Lists students of a department. An unknown department yields an empty page.
    pub async fn get_by_department(
        &self,
        department_id: &str,
        params: PageParams,
    ) -> Result<Page<Student>, AppError> {
        let request = params.into_request(DEFAULT_SORT_FIELD)?;
        let result = StudentRepository::new(self.db)
            .find_by_department_paged(department_id, &request)
            .await;

        to_page("students by department", result, &request)
    }

    /// Lists students born strictly between `start` and `end`, sorted by birth date unless
    /// another field is requested.
    pub async fn get_born_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        params: PageParams,
    ) -> Result<Page<Student>, AppError> {
        let request = params.into_request(BORN_BETWEEN_SORT_FIELD)?;
        let result = StudentRepository::new(self.db)
            .find_born_between_paged(start, end, &request)
            .await;

        to_page("students born between", result, &request)
    }

    /// Whole-word search over names and email.
    pub async fn text_search(
        &self,
        text: &str,
        params: PageParams,
    ) -> Result<Page<Student>, AppError> {
        let request = params.into_request(DEFAULT_SORT_FIELD)?;
        let result = StudentRepository::new(self.db)
            .text_search_paged(text, &request)
            .await;

        to_page("text search", result, &request)
    }

    /// Case-insensitive substring search on first and last name, unpaged.
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Student>, AppError> {
        tracing::info!("Searching students by name {:?}", name);

        let records = StudentRepository::new(self.db).search_by_name(name).await?;
        tracing::info!("Name search found {} students", records.len());

        Ok(records.into_iter().map(Student::from_entity).collect())
    }

    /// The five most recently enrolled students, newest first.
    pub async fn get_recent_enrollments(&self) -> Result<Vec<Student>, AppError> {
        let records = StudentRepository::new(self.db)
            .find_recent_enrollments()
            .await?;
        tracing::info!("Fetched {} recent enrollments", records.len());

        Ok(records.into_iter().map(Student::from_entity).collect())
    }

    pub async fn count_active(&self) -> Result<u64, AppError> {
        let count = StudentRepository::new(self.db).count_active().await?;
        tracing::info!("Active student count: {}", count);

        Ok(count)
    }

    /// Checks for a student with exactly this email (case-sensitive).
    pub async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        let exists = StudentRepository::new(self.db)
            .exists_by_email(email)
            .await?;
        tracing::info!("Student with email {:?} exists: {}", email, exists);

        Ok(exists)
    }

    async fn ensure_department_exists(&self, department_id: &str) -> Result<(), AppError> {
        if DepartmentRepository::new(self.db)
            .find_by_id(department_id)
            .await?
            .is_none()
        {
            tracing::warn!("Department {} not found", department_id);
            return Err(AppError::not_found("Department", "id", department_id));
        }

        Ok(())
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Wraps a repository page result into a domain page, logging its shape.
fn to_page(
    listing: &str,
    result: Result<(Vec<StudentWithRelations>, u64), DbErr>,
    request: &PageRequest,
) -> Result<Page<Student>, AppError> {
    let (records, total) = result?;
    let page = Page::new(records, request, total).map(Student::from_entity);

    tracing::debug!(
        "Fetched {} {} on page {} of {}",
        page.content.len(),
        listing,
        page.page_index + 1,
        page.total_pages()
    );

    Ok(page)
}

fn conflict_on_duplicate_email(err: DbErr, email: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict(format!("Student already exists with email : '{}'", email))
        }
        _ => err.into(),
    }
}
