//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixture functions create in-memory entity models for unit tests and serve as default
//! values for the factories. Unlike factories, fixtures do NOT insert data into the
//! database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let student = fixture::student::entity();
//! let inactive = fixture::student::entity_builder().is_active(false).build();
//! ```

pub mod course;
pub mod department;
pub mod student;

pub use course::{entity as course_entity, entity_builder as course_entity_builder};
pub use department::{entity as department_entity, entity_builder as department_entity_builder};
pub use student::{entity as student_entity, entity_builder as student_entity_builder};
