//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! entity records (optionally grouped with their relations) so the service layer can
//! convert them into domain models.

pub mod department;
pub mod student;
