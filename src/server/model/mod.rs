//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer. Domain models
//! are converted from entity models at the repository boundary and transformed to DTOs at
//! the controller boundary. Request validation lives here as well, so services only ever
//! see parameters that already satisfy every field constraint.

pub mod department;
pub mod page;
pub mod student;
