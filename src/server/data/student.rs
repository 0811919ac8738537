use std::collections::HashMap;

use sea_orm::{
    sea_query::{LikeExpr, Order, SelectStatement},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait, Select,
    TransactionTrait,
};

use crate::server::{
    model::{
        page::{PageRequest, SortDirection},
        student::{Course, StudentParams, StudentWithRelations},
    },
    util::id::new_id,
};

/// Number of students returned by `find_recent_enrollments`.
pub const RECENT_ENROLLMENT_LIMIT: u64 = 5;

/// Escape character for literal `%` and `_` in LIKE patterns.
const LIKE_ESCAPE: char = '!';

pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a student and its courses in one transaction.
    ///
    /// The id is generated here; any id the client sent has already been discarded.
    ///
    /// # Returns
    /// - `Ok(StudentWithRelations)` - The stored student with department and courses
    /// - `Err(DbErr)` - Insert failed, e.g. the email is already taken
    pub async fn create(&self, params: StudentParams) -> Result<StudentWithRelations, DbErr> {
        let id = new_id();

        let txn = self.db.begin().await?;
        insert_student(&txn, &id, params).await?;
        txn.commit().await?;

        self.get_by_id(&id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Student with id {} not found after creation",
            id
        )))
    }

    /// Gets a student by id with its department and courses.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<StudentWithRelations>, DbErr> {
        let row = entity::prelude::Student::find_by_id(id)
            .find_also_related(entity::prelude::Department)
            .one(self.db)
            .await?;

        match row {
            Some(row) => Ok(self.with_courses(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Overwrites every stored field of a student and replaces its course list.
    ///
    /// Runs in one transaction so a failed write leaves the previous record intact.
    ///
    /// # Returns
    /// - `Ok(Some(StudentWithRelations))` - The updated student
    /// - `Ok(None)` - No student with that id exists
    /// - `Err(DbErr)` - Update failed, e.g. the new email collides with another student
    pub async fn update(
        &self,
        id: &str,
        params: StudentParams,
    ) -> Result<Option<StudentWithRelations>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::prelude::Student::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut student: entity::student::ActiveModel = existing.into();
        student.first_name = ActiveValue::Set(params.first_name);
        student.last_name = ActiveValue::Set(params.last_name);
        student.email = ActiveValue::Set(params.email);
        student.date_of_birth = ActiveValue::Set(params.dob);
        student.department_id = ActiveValue::Set(params.department_id);
        student.enrollment_date = ActiveValue::Set(params.enrollment_date);
        student.is_active = ActiveValue::Set(params.active);
        student.update(&txn).await?;

        entity::prelude::Course::delete_many()
            .filter(entity::course::Column::StudentId.eq(id))
            .exec(&txn)
            .await?;
        insert_courses(&txn, id, params.courses).await?;

        txn.commit().await?;

        self.get_by_id(id).await
    }

    /// Deletes a student and its courses.
    ///
    /// # Returns
    /// - `Ok(true)` - The student existed and was removed
    /// - `Ok(false)` - No student with that id exists
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Course::delete_many()
            .filter(entity::course::Column::StudentId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Student::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets one page of all students.
    pub async fn find_all_paged(
        &self,
        page: &PageRequest,
    ) -> Result<(Vec<StudentWithRelations>, u64), DbErr> {
        self.find_paged(Condition::all(), page).await
    }

    /// Gets one page of active students.
    pub async fn find_active_paged(
        &self,
        page: &PageRequest,
    ) -> Result<(Vec<StudentWithRelations>, u64), DbErr> {
        self.find_paged(
            Condition::all().add(entity::student::Column::IsActive.eq(true)),
            page,
        )
        .await
    }

    /// Gets one page of students enrolled in a course with exactly this name.
    pub async fn find_by_course_paged(
        &self,
        course_name: &str,
        page: &PageRequest,
    ) -> Result<(Vec<StudentWithRelations>, u64), DbErr> {
        let courses = Condition::all().add(entity::course::Column::CourseName.eq(course_name));

        self.find_paged(
            Condition::all().add(entity::student::Column::Id.in_subquery(students_with(courses))),
            page,
        )
        .await
    }

    /// Gets one page of students having a single course named `course_name` whose marks are
    /// at least `min_score`.
    pub async fn find_high_scorers_paged(
        &self,
        course_name: &str,
        min_score: i32,
        page: &PageRequest,
    ) -> Result<(Vec<StudentWithRelations>, u64), DbErr> {
        let courses = Condition::all()
            .add(entity::course::Column::CourseName.eq(course_name))
            .add(entity::course::Column::Marks.gte(min_score));

        self.find_paged(
            Condition::all().add(entity::student::Column::Id.in_subquery(students_with(courses))),
            page,
        )
        .await
    }

    /// Gets one page of students referencing the given department.
    pub async fn find_by_department_paged(
        &self,
        department_id: &str,
        page: &PageRequest,
    ) -> Result<(Vec<StudentWithRelations>, u64), DbErr> {
        self.find_paged(
            Condition::all().add(entity::student::Column::DepartmentId.eq(department_id)),
            page,
        )
        .await
    }

    /// Gets one page of students born strictly between `start` and `end`.
    pub async fn find_born_between_paged(
        &self,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
        page: &PageRequest,
    ) -> Result<(Vec<StudentWithRelations>, u64), DbErr> {
        self.find_paged(
            Condition::all()
                .add(entity::student::Column::DateOfBirth.gt(start))
                .add(entity::student::Column::DateOfBirth.lt(end)),
            page,
        )
        .await
    }

    /// Gets one page of students matching any token of `text` as a whole word of their
    /// first name, last name or email.
    ///
    /// Matching runs against the stored `search_terms` column, whose words were folded
    /// with the same Unicode rules as the query tokens. Returns an empty page without
    /// querying when `text` has no alphanumeric tokens.
    pub async fn text_search_paged(
        &self,
        text: &str,
        page: &PageRequest,
    ) -> Result<(Vec<StudentWithRelations>, u64), DbErr> {
        let tokens = entity::student::split_words(text);
        if tokens.is_empty() {
            return Ok((Vec::new(), 0));
        }

        let mut condition = Condition::any();
        for token in &tokens {
            condition =
                condition.add(entity::student::Column::SearchTerms.like(word_pattern(token)));
        }

        self.find_paged(condition, page).await
    }

    /// Finds students whose first or last name contains `name`, ignoring case.
    ///
    /// The term is matched literally against the stored lower-cased names; `%` and `_` have
    /// no wildcard meaning.
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<StudentWithRelations>, DbErr> {
        let key = entity::student::name_key(name);

        let rows = entity::prelude::Student::find()
            .filter(
                Condition::any()
                    .add(entity::student::Column::FirstNameLower.like(contains_pattern(&key)))
                    .add(entity::student::Column::LastNameLower.like(contains_pattern(&key))),
            )
            .find_also_related(entity::prelude::Department)
            .order_by_asc(entity::student::Column::LastName)
            .order_by_asc(entity::student::Column::FirstName)
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        self.with_courses(rows).await
    }

    /// Gets the most recently enrolled students, newest first.
    pub async fn find_recent_enrollments(&self) -> Result<Vec<StudentWithRelations>, DbErr> {
        let rows = entity::prelude::Student::find()
            .find_also_related(entity::prelude::Department)
            .order_by_desc(entity::student::Column::EnrollmentDate)
            .order_by_asc(entity::student::Column::Id)
            .limit(RECENT_ENROLLMENT_LIMIT)
            .all(self.db)
            .await?;

        self.with_courses(rows).await
    }

    pub async fn count_active(&self) -> Result<u64, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::IsActive.eq(true))
            .count(self.db)
            .await
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::Student::find().count(self.db).await
    }

    /// Checks whether a student with exactly this email exists.
    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Student::find()
            .filter(entity::student::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts many students in one transaction and returns how many were written.
    pub async fn save_all(&self, students: Vec<StudentParams>) -> Result<u64, DbErr> {
        let count = students.len() as u64;

        let txn = self.db.begin().await?;
        for params in students {
            insert_student(&txn, &new_id(), params).await?;
        }
        txn.commit().await?;

        Ok(count)
    }

    async fn find_paged(
        &self,
        condition: Condition,
        page: &PageRequest,
    ) -> Result<(Vec<StudentWithRelations>, u64), DbErr> {
        let query = sorted(entity::prelude::Student::find().filter(condition), page);

        let paginator = query
            .find_also_related(entity::prelude::Department)
            .paginate(self.db, page.size);
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.page_index).await?;

        Ok((self.with_courses(rows).await?, total))
    }

    /// Attaches courses to each student row using a single query.
    async fn with_courses(
        &self,
        rows: Vec<(entity::student::Model, Option<entity::department::Model>)>,
    ) -> Result<Vec<StudentWithRelations>, DbErr> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let student_ids: Vec<String> = rows.iter().map(|(s, _)| s.id.clone()).collect();
        let mut courses_by_student: HashMap<String, Vec<entity::course::Model>> = HashMap::new();
        for course in entity::prelude::Course::find()
            .filter(entity::course::Column::StudentId.is_in(student_ids))
            .order_by_asc(entity::course::Column::Position)
            .all(self.db)
            .await?
        {
            courses_by_student
                .entry(course.student_id.clone())
                .or_default()
                .push(course);
        }

        Ok(rows
            .into_iter()
            .map(|(student, department)| {
                let courses = courses_by_student.remove(&student.id).unwrap_or_default();
                StudentWithRelations {
                    student,
                    department,
                    courses,
                }
            })
            .collect())
    }
}

async fn insert_student<C: ConnectionTrait>(
    conn: &C,
    id: &str,
    params: StudentParams,
) -> Result<(), DbErr> {
    entity::student::ActiveModel {
        id: ActiveValue::Set(id.to_string()),
        first_name: ActiveValue::Set(params.first_name),
        last_name: ActiveValue::Set(params.last_name),
        email: ActiveValue::Set(params.email),
        date_of_birth: ActiveValue::Set(params.dob),
        department_id: ActiveValue::Set(params.department_id),
        enrollment_date: ActiveValue::Set(params.enrollment_date),
        is_active: ActiveValue::Set(params.active),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    insert_courses(conn, id, params.courses).await
}

async fn insert_courses<C: ConnectionTrait>(
    conn: &C,
    student_id: &str,
    courses: Vec<Course>,
) -> Result<(), DbErr> {
    for (position, course) in courses.into_iter().enumerate() {
        entity::course::ActiveModel {
            student_id: ActiveValue::Set(student_id.to_string()),
            position: ActiveValue::Set(position as i32),
            course_name: ActiveValue::Set(course.name),
            marks: ActiveValue::Set(course.marks),
            ..Default::default()
        }
        .insert(conn)
        .await?;
    }

    Ok(())
}

/// Applies the requested ordering followed by an `id` tie-break.
fn sorted(
    query: Select<entity::student::Entity>,
    page: &PageRequest,
) -> Select<entity::student::Entity> {
    let order = match page.direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    };

    let query = match sort_column(&page.sort_field) {
        Some(column) => query.order_by(column, order),
        None => query,
    };

    query.order_by_asc(entity::student::Column::Id)
}

/// Maps an API sort key to a student column; unknown keys are ignored.
fn sort_column(field: &str) -> Option<entity::student::Column> {
    use entity::student::Column;

    match field {
        "id" => Some(Column::Id),
        "firstName" | "first_name" => Some(Column::FirstName),
        "lastName" | "last_name" => Some(Column::LastName),
        "email" | "email_address" => Some(Column::Email),
        "dob" | "date_of_birth" => Some(Column::DateOfBirth),
        "enrollmentDate" | "enrollment_date" => Some(Column::EnrollmentDate),
        "active" | "is_active" => Some(Column::IsActive),
        "department" | "department_id" => Some(Column::DepartmentId),
        _ => None,
    }
}

/// Sub-query selecting the ids of students owning at least one course matching `courses`.
fn students_with(courses: Condition) -> SelectStatement {
    entity::prelude::Course::find()
        .select_only()
        .column(entity::course::Column::StudentId)
        .filter(courses)
        .into_query()
}

/// `%term%` with LIKE metacharacters in `term` escaped.
fn contains_pattern(term: &str) -> LikeExpr {
    LikeExpr::new(format!("%{}%", escape_like(term))).escape(LIKE_ESCAPE)
}

/// `% token %`, matching `token` as a whole word of a space-padded word list.
fn word_pattern(token: &str) -> LikeExpr {
    LikeExpr::new(format!("% {} %", escape_like(token))).escape(LIKE_ESCAPE)
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if c == LIKE_ESCAPE || c == '%' || c == '_' {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}
