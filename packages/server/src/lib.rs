// District Guide - API Core
//
// Read-only backend for the Washington, DC directory site. The content
// schema (categories -> subcategories -> places) is maintained by external
// admin tooling; this crate resolves routing slugs into denormalized view
// models, assembles listing collections, and serves them as JSON.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
