//! WebSocket protocol message types.
//!
//! This module defines the message format for communication between the
//! local end (Rust) and the remote end driving the document.
//!
//! # Protocol Overview
//!
//! | Message Type | Direction | Purpose |
//! |--------------|-----------|---------|
//! | `Request` | Local → Remote | Command request |
//! | `Response` | Remote → Local | Command response |
//!
//! # Command Naming
//!
//! Commands follow `module.methodName` format:
//!
//! - `element.findAll`
//! - `element.perform`
//! - `script.execute`

// ============================================================================
// Submodules
// ============================================================================

/// Command definitions organized by module.
pub mod command;

/// Request and Response message types.
pub mod request;

// ============================================================================
// Re-exports
// ============================================================================

pub use command::{Action, Command, ElementCommand, ScriptCommand};
pub use request::{Request, Response, ResponseType};
