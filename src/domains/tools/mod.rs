//! Tools domain module.
//!
//! Every Golf Genius operation is exposed as an MCP tool.
//!
//! ## Architecture
//!
//! - `tool.rs` - [`GolfTool`] trait: metadata, STDIO route and HTTP handler
//! - `definitions/` - Tool implementations grouped by API area
//! - `router.rs` - Dynamic ToolRouter builder for STDIO transport
//! - `registry.rs` - Central tool registry and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Implement [`GolfTool`] in the matching file under `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add its route in `router.rs` using `with_route()`
//! 4. Register it in `registry.rs` for HTTP support

pub mod definitions;
mod error;
mod registry;
pub mod router;
pub(crate) mod tool;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
pub use tool::{GolfTool, ToolOutput};
