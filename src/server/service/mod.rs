//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer. They
//! validate incoming payloads, resolve department references, translate storage failures
//! into domain errors and convert repository records into domain models.

pub mod student;
