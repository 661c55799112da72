//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Error taxonomy (VaripError)
//! - Result model (Match, SearchReport)
//! - Tree flattening and key matching
//! - Search pattern compilation
//! - Traversal policy and path helpers
//! - Rendering of search reports

pub mod error;
pub mod flatten;
pub mod matcher;
pub mod model;
pub mod paths;
pub mod pattern;
pub mod policy;
pub mod render;
