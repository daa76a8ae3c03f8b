//! Wire models and GraphQL query builders for the Open Targets Platform API.
//!
//! This crate defines the canonical data model shared by the HTTP client,
//! control plane, and MCP surface.

pub mod models;
pub mod queries;

pub use models::*;
