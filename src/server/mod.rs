//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the application,
//! including API endpoints, business logic, data access and startup infrastructure. The
//! backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation, reference resolution and orchestration
//! - **Data Layer** (`data/`) - Database operations and query builders
//! - **Model Layer** (`model/`) - Domain models, parameter types and page requests
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Response post-processing
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database connection, migrations and seed data
//! - **Router** (`router`) - Axum route configuration
//! - **Documentation** (`doc`) - OpenAPI document served by Swagger UI
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** extracts path, query and body, then calls the service
//! 3. **Service** validates input, resolves references and calls repositories
//! 4. **Data** queries the database and returns entity records
//! 5. **Service** converts records into domain models
//! 6. **Controller** converts domain models to DTOs and returns the response
//! 7. **Middleware** stamps the request path onto error bodies

pub mod config;
pub mod controller;
pub mod data;
pub mod doc;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
