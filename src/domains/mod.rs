//! Business domains exposed over MCP.
//!
//! The server exposes a single domain: Golf Genius tools.

pub mod tools;
