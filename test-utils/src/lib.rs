//! Student Registry Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the student
//! registry service. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **fixture / factory**: In-memory models and inserted rows with sensible defaults
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_student_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_student_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (department, student) = factory::helpers::create_student_with_department(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
