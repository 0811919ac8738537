//! HTTP request handlers.
//!
//! Controllers extract request data, hand it to the service layer and convert the
//! returned domain models into DTOs. They hold no business logic of their own.

pub mod student;
