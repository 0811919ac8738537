use std::{path::Path, time::Instant};

use sea_orm::DatabaseConnection;
use serde::de::DeserializeOwned;

use crate::{
    model::{department::DepartmentDto, student::StudentDto},
    server::{
        config::Config,
        data::{department::DepartmentRepository, student::StudentRepository},
        error::AppError,
        model::{department::CreateDepartmentParams, student::StudentParams},
    },
};

const DEPARTMENTS_FILE: &str = "departments.json";
const STUDENTS_FILE: &str = "students.json";

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date before the server
/// accepts requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Loads departments and then students from `dir`, each only when its table is empty.
///
/// Failures are logged and the affected collection is skipped; startup always continues.
pub async fn seed_database(db: &DatabaseConnection, dir: &Path) {
    tracing::info!("Seeding data from {}", dir.display());

    if let Err(err) = seed_departments(db, dir).await {
        tracing::error!("Failed to seed departments: {}", err);
    }
    if let Err(err) = seed_students(db, dir).await {
        tracing::error!("Failed to seed students: {}", err);
    }

    tracing::info!("Seeding finished");
}

async fn seed_departments(db: &DatabaseConnection, dir: &Path) -> Result<(), AppError> {
    let start = Instant::now();
    let repo = DepartmentRepository::new(db);

    let existing = repo.count_all().await?;
    if existing > 0 {
        tracing::info!("Departments already exist (count = {}), skipping load", existing);
        return Ok(());
    }

    let records: Vec<DepartmentDto> = read_json(&dir.join(DEPARTMENTS_FILE))?;
    tracing::debug!("Loaded {} departments from {}", records.len(), DEPARTMENTS_FILE);

    let params = records
        .into_iter()
        .map(CreateDepartmentParams::from_dto)
        .collect::<Result<Vec<_>, _>>()?;
    let inserted = repo.save_all(params).await?;

    tracing::info!(
        "Inserted {} departments in {} ms",
        inserted,
        start.elapsed().as_millis()
    );

    Ok(())
}

async fn seed_students(db: &DatabaseConnection, dir: &Path) -> Result<(), AppError> {
    let start = Instant::now();
    let repo = StudentRepository::new(db);

    let existing = repo.count_all().await?;
    if existing > 0 {
        tracing::info!("Students already exist (count = {}), skipping load", existing);
        return Ok(());
    }

    let records: Vec<StudentDto> = read_json(&dir.join(STUDENTS_FILE))?;
    tracing::debug!("Loaded {} students from {}", records.len(), STUDENTS_FILE);

    let today = chrono::Local::now().date_naive();
    let params = records
        .into_iter()
        .map(|dto| StudentParams::from_dto(dto, today))
        .collect::<Result<Vec<_>, _>>()?;
    let inserted = repo.save_all(params).await?;

    tracing::info!(
        "Inserted {} students in {} ms",
        inserted,
        start.elapsed().as_millis()
    );

    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, AppError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
