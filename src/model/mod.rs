//! Data transfer objects exchanged over the HTTP API.
//!
//! These types define the JSON wire contract. Request DTOs keep every field optional so
//! that missing values surface as field validation errors rather than parse failures;
//! the server converts them to domain parameters after validation.

pub mod api;
pub mod department;
pub mod student;
