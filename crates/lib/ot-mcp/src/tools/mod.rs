//! MCP tool modules.
//!
//! Tools are grouped by domain: cross-entity search, single-entity detail
//! lookups, and scored association queries.

pub mod associations;
pub mod details;
pub mod search;
