//! Browser entities module.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Browser`] | Entry point over one session and strategy registry |
//! | [`Element`] | Resolved element handle |
//!
//! # Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | `core` | Browser struct and accessors |
//! | `elements` | Finder construction and immediate search |
//! | `script` | Script execution |
//! | `element` | Element handle |
//!
//! # Example
//!
//! ```no_run
//! use ng_finder::{Browser, By, RemoteSession, Result};
//! use ng_finder::transport::ConnectionOptions;
//!
//! # async fn example() -> Result<()> {
//! let options = ConnectionOptions::builder()
//!     .url("ws://127.0.0.1:4444/session")
//!     .build()?;
//! let browser = Browser::new(RemoteSession::connect(&options).await?);
//!
//! let greeting = browser.element(By::binding("greet")).get_text().await?;
//! let days = browser.all(By::repeater("day in days")).count().await?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Submodules
// ============================================================================

mod core;
mod elements;
mod script;

/// Resolved element handles.
pub mod element;

// ============================================================================
// Re-exports
// ============================================================================

pub use core::Browser;
pub use element::Element;
