//! SeaORM entity definitions for the student registry schema.
//!
//! Each module mirrors one table created by the `migration` crate. Courses are stored in
//! their own table but are owned by a student and have no identity outside of it.

pub mod prelude;

pub mod course;
pub mod department;
pub mod student;
