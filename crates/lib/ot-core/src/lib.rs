//! Core client, pagination, and control-plane services for ot-mcp.
//!
//! This crate owns the HTTP client for the Open Targets Platform GraphQL
//! API, the bounded pagination aggregator behind the association lookups,
//! and the control-plane operations exposed through the MCP surface.

pub mod client;
pub mod control;
pub mod format;
pub mod paging;
pub mod validate;
