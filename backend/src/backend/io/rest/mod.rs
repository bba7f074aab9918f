//! # REST API Interface Layer
//!
//! Provides HTTP REST endpoints for the expense tracker application.
//! This layer handles:
//! - HTTP request/response serialization and deserialization
//! - Input validation and sanitization
//! - Error translation from domain to HTTP status codes
//! - Request logging
//!
//! It is a pure translation layer: business rules live in the domain
//! services, and the mappers convert between public DTOs from the `shared`
//! crate and internal domain types.

pub mod budget_apis;
pub mod expense_apis;
pub mod mappers;
pub mod report_apis;
