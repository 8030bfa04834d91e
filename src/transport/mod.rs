//! WebSocket transport layer.
//!
//! This module handles communication between the local end (Rust) and the
//! remote end driving the document.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐                              ┌─────────────────┐
//! │  RemoteSession  │                              │  Remote End     │
//! │                 │         WebSocket            │                 │
//! │  Connection     │◄────────────────────────────►│  (driver /      │
//! │  (event loop)   │      ws://HOST:PORT          │   bridge)       │
//! └─────────────────┘                              └─────────────────┘
//! ```
//!
//! # Connection Lifecycle
//!
//! 1. `ConnectionOptions::builder()` - Configure and validate endpoint
//! 2. `Connection::connect` - Handshake, spawn event loop
//! 3. `Connection::send` - Issue requests, await correlated responses
//! 4. `Connection::shutdown` - Close socket, fail pending requests
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `connection` | WebSocket connection and event loop |
//! | `options` | Validated connection configuration |

// ============================================================================
// Submodules
// ============================================================================

/// WebSocket connection and event loop.
pub mod connection;

/// Connection configuration and builder.
pub mod options;

// ============================================================================
// Re-exports
// ============================================================================

pub use connection::Connection;
pub use options::{ConnectionOptions, ConnectionOptionsBuilder};
