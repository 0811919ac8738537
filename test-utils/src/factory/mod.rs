//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each
//! entity has a `Factory` struct for customization and a `create_*` convenience function
//! for quick default creation.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let department = factory::create_department(&db).await?;
//! let student = factory::student::StudentFactory::new(&db, &department.id)
//!     .last_name("Hopper")
//!     .course("Algorithms", 92)
//!     .build()
//!     .await?;
//! ```

pub mod department;
pub mod helpers;
pub mod student;

pub use department::create_department;
pub use student::create_student;
