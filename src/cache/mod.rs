//! Caching utilities for the Address Book MCP Server.
//!
//! This module provides a single-slot cache with TTL support, used to reuse a
//! loaded address book snapshot across commands.

pub mod snapshot_cache;

pub use snapshot_cache::SnapshotCache;
