//! Thin server endpoints over the forum platform's database.
//!
//! The server exposes the read-only listings the platform's API lacks (categories,
//! recent topics, server statistics) in the envelope shape the API client expects,
//! plus a receiver for the platform's webhooks. It uses Axum for HTTP and SeaORM
//! for database access.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, API key check and DTO conversion
//! - **Service Layer** (`service/`) - Orchestration between controllers and repositories
//! - **Data Layer** (`data/`) - Read-only queries returning entity rows
//! - **Model Layer** (`model/`) - Domain models built from entity rows
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Request guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Database pool and shared secret
//! - **Startup** (`startup`) - Tracing, database connection and CORS
//! - **Router** (`router`) - Routes and OpenAPI documentation
//!
//! # Request Flow
//!
//! 1. **Router** dispatches the request to a controller
//! 2. **Controller** checks the `api_key` before anything else
//! 3. **Service** calls the repositories and builds domain models
//! 4. **Controller** converts domain models to DTOs inside a success envelope
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

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
