//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the DevCamper API: HTTP endpoints,
//! business rules, data access, and the infrastructure that wires them together.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules: ownership, averages, geocoding, tokens
//! - **Data Layer** (`data/`) - Database operations, query shaping and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Token extraction and role guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, geocoder, token signing, upload settings)
//! - **Startup** (`startup`) - Database connection and migrations, HTTP client, shutdown signal
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** extracts the bearer token; the controller's guard resolves the user
//! 3. **Controller** validates the payload, converts DTOs to params, calls service
//! 4. **Service** enforces ownership and business rules, orchestrates data operations
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

#[cfg(test)]
pub mod testing;
